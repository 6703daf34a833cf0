pub mod honeybadger_client;
pub mod remote;
pub mod reply;

pub use honeybadger_client::HoneybadgerClient;
pub use remote::RemoteApi;
pub use reply::{Invitation, Reply};
