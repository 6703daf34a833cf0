pub mod auth;
pub mod team;
pub mod teams;
pub mod user;

pub use auth::{handle_auth, verify_key};
pub use team::{desired_team, handle_team};
pub use teams::handle_teams;
pub use user::{desired_user, handle_user};
