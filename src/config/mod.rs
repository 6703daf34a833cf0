pub mod config;

pub use config::{Config, get_api_key, get_api_url, load_config, load_config_from, save_config, save_config_to};
