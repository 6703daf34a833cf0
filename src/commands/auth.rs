use clap::ArgMatches;
use colored::*;
use crate::cli_context::CliContext;
use crate::client::{HoneybadgerClient, RemoteApi};
use crate::config::{load_config, save_config};
use crate::error::ProvisionResult;

pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// List teams with `api_key` against the context's API URL; returns how many are visible.
pub async fn verify_key(api_key: &str, context: &mut CliContext) -> ProvisionResult<usize> {
    let api_url = context.api_url()?.clone();
    let client = HoneybadgerClient::with_base_url(api_key.to_string(), &api_url)?;

    let teams = client
        .list_teams()
        .await
        .into_result(|| "Unable to request teams info".to_string())?;
    Ok(teams.len())
}

pub async fn handle_auth(matches: &ArgMatches, context: &mut CliContext) -> ProvisionResult<()> {
    if let Some(api_key) = matches.get_one::<String>("key") {
        let mut config = load_config()?;
        config.api_key = Some(api_key.clone());
        save_config(&config)?;
        println!("API key saved successfully!");

        // Test the API key
        match verify_key(api_key, context).await {
            Ok(count) => println!("{} Key accepted, {} teams visible", "✅".green(), count),
            Err(e) => println!("{} Failed to authenticate: {}", "❌".red(), e),
        }
    } else if matches.get_flag("show") {
        let config = load_config()?;
        match config.api_key {
            Some(key) => println!("API Key: {}", mask_key(&key)),
            None => println!("No API key configured"),
        }
    } else {
        println!("Usage: honeybadger auth --key <KEY> or honeybadger auth --show");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_keys() {
        assert_eq!(mask_key("abcd1234wxyz"), "abcd...wxyz");
        assert_eq!(mask_key("short"), "*****");
    }
}
