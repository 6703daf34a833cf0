use clap::ArgMatches;
use crate::client::HoneybadgerClient;
use crate::config::{get_api_key, get_api_url};
use crate::error::{ProvisionError, ProvisionResult};
use std::sync::Arc;

/// Central context for CLI operations, managing credentials and the client instance
pub struct CliContext {
    api_key: Option<String>,
    api_url: Option<String>,
    client: Option<Arc<HoneybadgerClient>>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_url: None,
            client: None,
        }
    }

    /// Get or create a client; fails when no API key can be resolved
    pub fn client(&mut self) -> ProvisionResult<Arc<HoneybadgerClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_key = self.api_key()?.clone();
        let api_url = self.api_url()?.clone();
        let client = Arc::new(HoneybadgerClient::with_base_url(api_key, &api_url)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the API key, resolving it from the environment or config if necessary
    pub fn api_key(&mut self) -> ProvisionResult<&String> {
        if self.api_key.is_none() {
            self.api_key = Some(get_api_key(None)?);
        }

        self.api_key.as_ref().ok_or(ProvisionError::ApiKeyNotFound)
    }

    pub fn api_url(&mut self) -> ProvisionResult<&String> {
        if self.api_url.is_none() {
            self.api_url = Some(get_api_url(None)?);
        }

        self.api_url
            .as_ref()
            .ok_or_else(|| ProvisionError::ConfigError("API URL not resolved".to_string()))
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts from command-line overrides
pub struct CliContextBuilder {
    api_key: Option<String>,
    api_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_url: None,
        }
    }

    /// Seed the builder from the global `--api-key` / `--api-url` flags
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            api_key: matches.get_one::<String>("api-key").cloned(),
            api_url: matches.get_one::<String>("api-url").cloned(),
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn build(self) -> ProvisionResult<CliContext> {
        let api_url = match self.api_url {
            Some(url) => Some(get_api_url(Some(&url))?),
            None => None,
        };

        Ok(CliContext {
            api_key: self.api_key.filter(|key| !key.is_empty()),
            api_url,
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
