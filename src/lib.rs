// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod reconcile;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{HoneybadgerClient, Invitation, RemoteApi, Reply};
pub use config::{Config, get_api_key, load_config, save_config};
pub use error::{ProvisionError, ProvisionResult};
pub use models::*;
pub use reconcile::{provision_team, provision_user};
