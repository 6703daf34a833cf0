pub mod directory;
pub mod team;
pub mod user;

pub use directory::{MemberDirectory, TeamDirectory, find_member, find_team};
pub use team::{TeamAction, TeamReconciler};
pub use user::{UserAction, UserReconciler};

use crate::client::RemoteApi;
use crate::error::{ProvisionError, ProvisionResult};
use crate::logging::log_info;
use crate::models::{DesiredTeamState, DesiredUserState, Outcome};

/// Fetch the team directory and bring one team to its desired presence.
pub async fn provision_team(api: &dyn RemoteApi, desired: &DesiredTeamState) -> ProvisionResult<Outcome> {
    log_info(&format!("Reconciling team {} to {}", desired.name, desired.presence));
    let directory = TeamDirectory::fetch(api).await?;
    let found = directory.find(&desired.name);

    TeamReconciler::new(api).reconcile(desired, found).await
}

/// Fetch the team directory and bring one membership to its desired state.
///
/// The team has to exist already; a missing team is fatal and nothing is
/// sent to the remote service beyond the directory fetch.
pub async fn provision_user(api: &dyn RemoteApi, desired: &DesiredUserState) -> ProvisionResult<Outcome> {
    log_info(&format!(
        "Reconciling user {} in team {} to {} (admin={})",
        desired.email, desired.team, desired.presence, desired.admin
    ));
    let directory = TeamDirectory::fetch(api).await?;
    let team = directory.find(&desired.team).ok_or_else(|| {
        ProvisionError::Precondition(format!(
            "Team {} not found, team must exist before user operations.",
            desired.team
        ))
    })?;
    let found = MemberDirectory::new(team).find(&desired.email);

    UserReconciler::new(api).reconcile(desired, team, found).await
}
