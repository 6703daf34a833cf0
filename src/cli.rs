use clap::{Arg, ArgAction, Command};

fn state_arg() -> Arg {
    Arg::new("state")
        .long("state")
        .value_name("STATE")
        .help("Desired state")
        .value_parser(["present", "absent"])
        .default_value("present")
}

pub fn build_cli() -> Command {
    Command::new("honeybadger")
        .about("Provision Honeybadger teams and team members idempotently")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("KEY")
                .help("Honeybadger personal API key (overrides HONEYBADGER_API_KEY and saved config)")
                .global(true)
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the Honeybadger API")
                .global(true)
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text")
                .global(true)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Echo log lines to stderr")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("team")
                .about("Ensure a team is present in or absent from the organization")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Team name")
                        .required(true)
                )
                .arg(state_arg())
        )
        .subcommand(
            Command::new("user")
                .about("Ensure a user's membership and role in a team")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .value_name("EMAIL")
                        .help("Email of the user")
                        .required(true)
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .value_name("TEAM")
                        .help("Team the user belongs to; must already exist")
                        .required(true)
                )
                .arg(
                    Arg::new("admin")
                        .long("admin")
                        .help("User should be a team admin")
                        .action(ArgAction::SetTrue)
                )
                .arg(state_arg())
        )
        .subcommand(
            Command::new("teams")
                .about("List teams in the organization")
        )
        .subcommand(
            Command::new("auth")
                .about("Manage the stored API key")
                .arg(
                    Arg::new("key")
                        .long("key")
                        .value_name("KEY")
                        .help("Save a Honeybadger API key")
                        .conflicts_with("show")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the saved API key, masked")
                        .action(ArgAction::SetTrue)
                )
        )
}
