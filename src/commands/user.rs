use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::{ProvisionError, ProvisionResult};
use crate::models::{DesiredUserState, Outcome, Presence};
use crate::reconcile::provision_user;

pub fn desired_user(matches: &ArgMatches) -> ProvisionResult<DesiredUserState> {
    let email = matches.get_one::<String>("email")
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ProvisionError::InvalidInput("user email is required".to_string()))?;
    let team = matches.get_one::<String>("team")
        .filter(|team| !team.is_empty())
        .ok_or_else(|| ProvisionError::InvalidInput("team name is required".to_string()))?;
    let presence = matches.get_one::<String>("state")
        .map(|s| s.parse::<Presence>())
        .transpose()?
        .unwrap_or_default();

    Ok(DesiredUserState::new(email.clone(), team.clone(), matches.get_flag("admin"), presence))
}

pub async fn handle_user(matches: &ArgMatches, context: &mut CliContext) -> ProvisionResult<Outcome> {
    let desired = desired_user(matches)?;
    let client = context.client()?;

    provision_user(client.as_ref(), &desired).await
}
