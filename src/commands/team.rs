use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{ProvisionError, ProvisionResult};
use crate::models::{DesiredTeamState, Outcome, Presence};
use crate::reconcile::provision_team;

pub fn desired_team(matches: &ArgMatches) -> ProvisionResult<DesiredTeamState> {
    let name = matches.get_one::<String>("name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ProvisionError::InvalidInput("team name is required".to_string()))?;
    let presence = matches.get_one::<String>("state")
        .map(|s| s.parse::<Presence>())
        .transpose()?
        .unwrap_or_default();

    Ok(DesiredTeamState::new(name.clone(), presence))
}

pub async fn handle_team(matches: &ArgMatches, context: &mut CliContext) -> ProvisionResult<Outcome> {
    let desired = desired_team(matches)?;
    let client = context.client()?;

    provision_team(client.as_ref(), &desired).await
}
