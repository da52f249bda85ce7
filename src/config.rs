use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord_token: String,
    pub rl_api_base: String,
    pub val_api_base: String,
    pub guild_id: Option<u64>,
    pub remove_commands: bool,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))
        };

        let guild_id = match lookup("GUILD_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("GUILD_ID must be a numeric id: {}", e))?,
            ),
            None => None,
        };

        let remove_commands = match lookup("REMOVE_COMMANDS") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow::anyhow!("REMOVE_COMMANDS must be true or false, got {:?}", raw))?,
            None => true,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be whole seconds: {}", e))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            discord_token: required("DISCORD_TOKEN")?,
            rl_api_base: required("RL_API")?,
            val_api_base: required("VAL_API")?,
            guild_id,
            remove_commands,
            request_timeout,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
