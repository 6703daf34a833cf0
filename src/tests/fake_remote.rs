use std::sync::Mutex;
use async_trait::async_trait;

use crate::client::{Invitation, RemoteApi, Reply};
use crate::models::{MemberId, MemberRecord, TeamId, TeamRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTeams,
    CreateTeam(String),
    DeleteTeam(TeamId),
    Invite { team: TeamId, email: String, admin: bool },
    UpdateRole { team: TeamId, member: MemberId, admin: bool },
    DeleteMember { team: TeamId, member: MemberId },
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::ListTeams)
    }
}

#[derive(Default)]
struct FakeState {
    teams: Vec<TeamRecord>,
    invitations: Vec<(TeamId, String)>,
    next_id: u64,
    calls: Vec<Call>,
    scripted: Option<(u16, String)>,
    list_failure: Option<Reply<Vec<TeamRecord>>>,
}

/// In-memory organization that behaves like the remote service.
pub struct FakeRemote {
    state: Mutex<FakeState>,
}

pub fn team(id: &str, name: &str) -> TeamRecord {
    TeamRecord {
        id: TeamId::new(id),
        name: name.to_string(),
        members: Vec::new(),
    }
}

pub fn member(id: &str, email: &str, admin: bool) -> MemberRecord {
    MemberRecord {
        id: MemberId::new(id),
        email: email.to_string(),
        name: None,
        admin,
    }
}

impl FakeRemote {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                teams,
                next_id: 100,
                ..FakeState::default()
            }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_invitation(self, team: &str, email: &str) -> Self {
        self.state.lock().unwrap().invitations.push((TeamId::new(team), email.to_string()));
        self
    }

    /// The next mutating call answers with this status instead of succeeding.
    pub fn answer_next_with(&self, status: u16, body: &str) {
        self.state.lock().unwrap().scripted = Some((status, body.to_string()));
    }

    pub fn fail_listing(&self, reply: Reply<Vec<TeamRecord>>) {
        self.state.lock().unwrap().list_failure = Some(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn teams(&self) -> Vec<TeamRecord> {
        self.state.lock().unwrap().teams.clone()
    }

    fn record(&self, call: Call) -> Option<(u16, String)> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state.scripted.take()
    }
}

fn scripted<T>(status: u16, body: String) -> Reply<T> {
    Reply::UnexpectedStatus { status, body }
}

#[async_trait]
impl RemoteApi for FakeRemote {
    async fn list_teams(&self) -> Reply<Vec<TeamRecord>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListTeams);
        match state.list_failure.clone() {
            Some(reply) => reply,
            None => Reply::Ok(state.teams.clone()),
        }
    }

    async fn create_team(&self, name: &str) -> Reply<()> {
        if let Some((status, body)) = self.record(Call::CreateTeam(name.to_string())) {
            return scripted(status, body);
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id.to_string();
        state.teams.push(team(&id, name));
        Reply::Ok(())
    }

    async fn delete_team(&self, id: &TeamId) -> Reply<()> {
        if let Some((status, body)) = self.record(Call::DeleteTeam(id.clone())) {
            return scripted(status, body);
        }
        let mut state = self.state.lock().unwrap();
        let before = state.teams.len();
        state.teams.retain(|t| &t.id != id);
        if state.teams.len() == before {
            return scripted(404, "team not found".to_string());
        }
        Reply::Ok(())
    }

    async fn invite_member(&self, team: &TeamId, email: &str, admin: bool) -> Reply<Invitation> {
        let call = Call::Invite {
            team: team.clone(),
            email: email.to_string(),
            admin,
        };
        if let Some((status, body)) = self.record(call) {
            return scripted(status, body);
        }
        let mut state = self.state.lock().unwrap();
        let key = (team.clone(), email.to_string());
        if state.invitations.contains(&key) {
            return Reply::Ok(Invitation::AlreadyInvited);
        }
        state.invitations.push(key);
        Reply::Ok(Invitation::Sent)
    }

    async fn update_member_role(&self, team: &TeamId, member: &MemberId, admin: bool) -> Reply<()> {
        let call = Call::UpdateRole {
            team: team.clone(),
            member: member.clone(),
            admin,
        };
        if let Some((status, body)) = self.record(call) {
            return scripted(status, body);
        }
        let mut state = self.state.lock().unwrap();
        let found = state
            .teams
            .iter_mut()
            .filter(|t| &t.id == team)
            .flat_map(|t| t.members.iter_mut())
            .find(|m| &m.id == member);
        match found {
            Some(m) => {
                m.admin = admin;
                Reply::Ok(())
            }
            None => scripted(404, "member not found".to_string()),
        }
    }

    async fn delete_member(&self, team: &TeamId, member: &MemberId) -> Reply<()> {
        let call = Call::DeleteMember {
            team: team.clone(),
            member: member.clone(),
        };
        if let Some((status, body)) = self.record(call) {
            return scripted(status, body);
        }
        let mut state = self.state.lock().unwrap();
        for t in state.teams.iter_mut().filter(|t| &t.id == team) {
            t.members.retain(|m| &m.id != member);
        }
        Reply::Ok(())
    }
}
