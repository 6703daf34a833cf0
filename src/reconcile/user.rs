use crate::client::{Invitation, RemoteApi};
use crate::error::ProvisionResult;
use crate::logging::log_info;
use crate::models::{DesiredUserState, MemberId, MemberRecord, Outcome, Presence, TeamRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Invite,
    Promote(MemberId),
    Demote(MemberId),
    Remove(MemberId),
    AlreadyMember,
    AlreadyAbsent,
}

pub struct UserReconciler<'a> {
    api: &'a dyn RemoteApi,
}

impl<'a> UserReconciler<'a> {
    pub fn new(api: &'a dyn RemoteApi) -> Self {
        Self { api }
    }

    /// Arms are tried top to bottom. A role mismatch on an existing member is
    /// corrected before removal is considered, even when `presence` is absent.
    pub fn plan(desired: &DesiredUserState, found: Option<&MemberRecord>) -> UserAction {
        match (desired.presence, found) {
            (Presence::Present, None) => UserAction::Invite,
            (_, Some(member)) if !member.admin && desired.admin => {
                UserAction::Promote(member.id.clone())
            }
            (_, Some(member)) if member.admin && !desired.admin => {
                UserAction::Demote(member.id.clone())
            }
            (Presence::Absent, Some(member)) => UserAction::Remove(member.id.clone()),
            (Presence::Present, Some(_)) => UserAction::AlreadyMember,
            (Presence::Absent, None) => UserAction::AlreadyAbsent,
        }
    }

    pub async fn reconcile(
        &self,
        desired: &DesiredUserState,
        team: &TeamRecord,
        found: Option<&MemberRecord>,
    ) -> ProvisionResult<Outcome> {
        let email = desired.email.as_str();
        let team_name = desired.team.as_str();
        let action = Self::plan(desired, found);
        log_info(&format!("user {} in team {}: {:?}", email, team_name, action));

        match action {
            UserAction::Invite => {
                let invitation = self
                    .api
                    .invite_member(&team.id, email, desired.admin)
                    .await
                    .into_result(|| format!("Failed to invite user: {}", email))?;
                Ok(match invitation {
                    Invitation::Sent => Outcome::changed(
                        email,
                        format!("User {} invited to team {}", email, team_name),
                    ),
                    Invitation::AlreadyInvited => Outcome::unchanged(
                        email,
                        format!("User {} already invited to team {}", email, team_name),
                    ),
                })
            }
            UserAction::Promote(member) => {
                self.api
                    .update_member_role(&team.id, &member, true)
                    .await
                    .into_result(|| format!("Failed to grant Admin role to user: {}", email))?;
                Ok(Outcome::changed(
                    email,
                    format!("User {} upgraded to Admin in Team {}", email, team_name),
                ))
            }
            UserAction::Demote(member) => {
                self.api
                    .update_member_role(&team.id, &member, false)
                    .await
                    .into_result(|| {
                        format!("Failed to downgrade to Team Member role to user: {}", email)
                    })?;
                Ok(Outcome::changed(
                    email,
                    format!("User {} downgraded to team member in Team {}", email, team_name),
                ))
            }
            UserAction::Remove(member) => {
                self.api
                    .delete_member(&team.id, &member)
                    .await
                    .into_result(|| format!("Failed to delete user: {}", email))?;
                Ok(Outcome::changed(
                    email,
                    format!("User {} deleted from team {}", email, team_name),
                ))
            }
            UserAction::AlreadyMember => Ok(Outcome::unchanged(
                email,
                format!("User {} already member of team {}", email, team_name),
            )),
            UserAction::AlreadyAbsent => Ok(Outcome::unchanged(
                email,
                format!("User {} already absent from team {}", email, team_name),
            )),
        }
    }
}
