pub mod desired;
pub mod outcome;
pub mod team;

pub use desired::{DesiredTeamState, DesiredUserState, Presence};
pub use outcome::Outcome;
pub use team::{MemberId, MemberRecord, TeamId, TeamRecord, TeamsPage};
