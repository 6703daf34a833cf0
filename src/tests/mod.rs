mod fake_remote;
mod team_reconciler_tests;
