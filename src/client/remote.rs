use async_trait::async_trait;

use crate::client::reply::{Invitation, Reply};
use crate::models::{MemberId, TeamId, TeamRecord};

/// The team-management surface of the remote service.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// `GET /v2/teams`, success on 200.
    async fn list_teams(&self) -> Reply<Vec<TeamRecord>>;

    /// `POST /v2/teams`, success on 201.
    async fn create_team(&self, name: &str) -> Reply<()>;

    /// `DELETE /v2/teams/{id}`, success on 204.
    async fn delete_team(&self, team: &TeamId) -> Reply<()>;

    /// `POST /v2/teams/{id}/team_invitations`, 201 sent, 422 already invited.
    async fn invite_member(&self, team: &TeamId, email: &str, admin: bool) -> Reply<Invitation>;

    /// `PUT /v2/teams/{id}/team_members/{id}`, success on 204.
    async fn update_member_role(&self, team: &TeamId, member: &MemberId, admin: bool) -> Reply<()>;

    /// `DELETE /v2/teams/{id}/team_members/{id}`, success on 204.
    async fn delete_member(&self, team: &TeamId, member: &MemberId) -> Reply<()>;
}
