use crate::client::RemoteApi;
use crate::error::ProvisionResult;
use crate::logging::log_debug;
use crate::models::{MemberRecord, TeamRecord};

/// Snapshot of every team in the organization, fetched once per invocation.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: Vec<TeamRecord>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self { teams }
    }

    pub async fn fetch(api: &dyn RemoteApi) -> ProvisionResult<Self> {
        let teams = api
            .list_teams()
            .await
            .into_result(|| "Unable to request teams info".to_string())?;
        log_debug(&format!("Fetched {} teams", teams.len()));
        Ok(Self::new(teams))
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn find(&self, name: &str) -> Option<&TeamRecord> {
        find_team(&self.teams, name)
    }
}

/// First team, in snapshot order, whose name contains `name`.
///
/// Containment rather than equality: "alpha" also matches "alphabeta", so
/// names that are substrings of one another are ambiguous.
pub fn find_team<'a>(teams: &'a [TeamRecord], name: &str) -> Option<&'a TeamRecord> {
    teams.iter().find(|team| team.name.contains(name))
}

/// Members of one team, looked up by email containment.
#[derive(Debug, Clone, Copy)]
pub struct MemberDirectory<'a> {
    team: &'a TeamRecord,
}

impl<'a> MemberDirectory<'a> {
    pub fn new(team: &'a TeamRecord) -> Self {
        Self { team }
    }

    pub fn find(&self, email: &str) -> Option<&'a MemberRecord> {
        find_member(self.team, email)
    }
}

pub fn find_member<'a>(team: &'a TeamRecord, email: &str) -> Option<&'a MemberRecord> {
    team.members.iter().find(|member| member.email.contains(email))
}
