pub mod output;
pub mod teams;
pub mod utils;

pub use output::{OutputFormat, print_failure, print_outcome, render_failure, render_outcome};
pub use teams::{print_teams, render_teams_json, team_row};
pub use utils::{pluralize, truncate};
