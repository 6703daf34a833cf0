pub const HONEYBADGER_API_URL: &str = "https://app.honeybadger.io";
pub const CONFIG_FILE: &str = ".honeybadger-provision.json";

pub const API_KEY_ENV: &str = "HONEYBADGER_API_KEY";
pub const API_URL_ENV: &str = "HONEYBADGER_API_URL";

pub const TEAMS_PATH: &str = "/v2/teams";

// Status codes the remote service answers with on the happy paths
pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_UNPROCESSABLE: u16 = 422;
