use std::process;

use honeybadger_provision::cli::build_cli;
use honeybadger_provision::cli_context::CliContextBuilder;
use honeybadger_provision::commands::{handle_auth, handle_team, handle_teams, handle_user};
use honeybadger_provision::error::ProvisionResult;
use honeybadger_provision::formatting::{print_failure, print_outcome, OutputFormat};
use honeybadger_provision::logging::{init_logging, log_error, log_info, log_panic_info};
use honeybadger_provision::models::Outcome;

async fn run(matches: &clap::ArgMatches) -> ProvisionResult<Option<Outcome>> {
    let mut context = CliContextBuilder::from_matches(matches).build()?;

    match matches.subcommand() {
        Some(("team", sub_matches)) => handle_team(sub_matches, &mut context).await.map(Some),
        Some(("user", sub_matches)) => handle_user(sub_matches, &mut context).await.map(Some),
        Some(("teams", sub_matches)) => handle_teams(sub_matches, &mut context).await.map(|_| None),
        Some(("auth", sub_matches)) => handle_auth(sub_matches, &mut context).await.map(|_| None),
        _ => {
            eprintln!("Unknown command. Use 'honeybadger --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let format = matches
        .get_one::<String>("format")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or_default();
    let verbose = matches.get_flag("verbose");

    if let Err(e) = init_logging(verbose) {
        if verbose {
            eprintln!("Logging disabled: {}", e);
        }
    }
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    match run(&matches).await {
        Ok(Some(outcome)) => {
            log_info(&format!("{} (changed={})", outcome.message, outcome.changed));
            print_outcome(&outcome, format);
        }
        Ok(None) => {}
        Err(e) => {
            log_error(&e.to_string());
            print_failure(&e, format);
            process::exit(1);
        }
    }
}
