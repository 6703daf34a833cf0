use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::ProvisionResult;
use crate::formatting::{print_teams, render_teams_json, OutputFormat};
use crate::reconcile::TeamDirectory;

pub async fn handle_teams(matches: &ArgMatches, context: &mut CliContext) -> ProvisionResult<()> {
    let format = matches.get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let client = context.client()?;

    let directory = TeamDirectory::fetch(client.as_ref()).await?;
    match format {
        OutputFormat::Json => println!("{}", render_teams_json(directory.teams())?),
        OutputFormat::Text => print_teams(directory.teams()),
    }

    Ok(())
}
