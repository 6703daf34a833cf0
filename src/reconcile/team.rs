use crate::client::RemoteApi;
use crate::error::ProvisionResult;
use crate::logging::log_info;
use crate::models::{DesiredTeamState, Outcome, Presence, TeamId, TeamRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    Create,
    Delete(TeamId),
    AlreadyPresent,
    AlreadyAbsent,
}

pub struct TeamReconciler<'a> {
    api: &'a dyn RemoteApi,
}

impl<'a> TeamReconciler<'a> {
    pub fn new(api: &'a dyn RemoteApi) -> Self {
        Self { api }
    }

    pub fn plan(desired: &DesiredTeamState, found: Option<&TeamRecord>) -> TeamAction {
        match (desired.presence, found) {
            (Presence::Present, None) => TeamAction::Create,
            (Presence::Absent, Some(team)) => TeamAction::Delete(team.id.clone()),
            (Presence::Present, Some(_)) => TeamAction::AlreadyPresent,
            (Presence::Absent, None) => TeamAction::AlreadyAbsent,
        }
    }

    /// Perform at most one create or delete so the team matches `desired`.
    pub async fn reconcile(
        &self,
        desired: &DesiredTeamState,
        found: Option<&TeamRecord>,
    ) -> ProvisionResult<Outcome> {
        let name = desired.name.as_str();
        let action = Self::plan(desired, found);
        log_info(&format!("team {}: {:?}", name, action));

        match action {
            TeamAction::Create => {
                self.api
                    .create_team(name)
                    .await
                    .into_result(|| format!("Failed to create team: {}", name))?;
                Ok(Outcome::changed(name, format!("team {} created.", name)))
            }
            TeamAction::Delete(id) => {
                self.api
                    .delete_team(&id)
                    .await
                    .into_result(|| format!("Failed to delete team: {}", name))?;
                Ok(Outcome::changed(name, format!("team {} deleted.", name)))
            }
            TeamAction::AlreadyPresent => Ok(Outcome::unchanged(
                name,
                format!("Team {} already present in organization.", name),
            )),
            TeamAction::AlreadyAbsent => Ok(Outcome::unchanged(
                name,
                format!("Team {} already absent from organization.", name),
            )),
        }
    }
}
