//! # Slash Commands (/)
//!
//! Discord native slash commands with choice-constrained options.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Rank lookups for Rocket League and Valorant

mod rocket_league;
mod valorant;

use anyhow::Result;
use log::{info, warn};
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::application_command::CommandDataOption;
use serenity::model::id::GuildId;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RankError;
use crate::models::RankQuery;

/// String option values of one invocation, keyed by option name.
pub type CommandOptions = HashMap<String, String>;

/// The commands this bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankCommand {
    RocketLeague,
    Valorant,
}

impl RankCommand {
    pub const ALL: [RankCommand; 2] = [RankCommand::RocketLeague, RankCommand::Valorant];

    pub fn name(&self) -> &'static str {
        match self {
            RankCommand::RocketLeague => rocket_league::NAME,
            RankCommand::Valorant => valorant::NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn definition(&self) -> CreateApplicationCommand {
        match self {
            RankCommand::RocketLeague => rocket_league::create_command(),
            RankCommand::Valorant => valorant::create_command(),
        }
    }

    pub fn parse_query(&self, options: &CommandOptions) -> Result<RankQuery, RankError> {
        match self {
            RankCommand::RocketLeague => rocket_league::parse_query(options),
            RankCommand::Valorant => valorant::parse_query(options),
        }
    }

    /// Whether the failure title carries a `#tag`.
    pub fn uses_tag(&self) -> bool {
        matches!(self, RankCommand::Valorant)
    }
}

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    RankCommand::ALL.iter().map(RankCommand::definition).collect()
}

/// Registers the rank commands, scoped to one guild when given (faster for
/// testing) and globally otherwise. Returns what Discord created so exactly
/// those commands can be removed again on shutdown.
pub async fn register_commands(http: &Arc<Http>, guild_id: Option<GuildId>) -> Result<Vec<Command>> {
    let slash_commands = create_slash_commands();

    let registered = match guild_id {
        Some(guild_id) => {
            let registered = guild_id
                .set_application_commands(http, |commands| {
                    for command in slash_commands {
                        commands.add_application_command(command);
                    }
                    commands
                })
                .await?;
            info!("Guild slash commands registered successfully for guild: {}", guild_id);
            registered
        }
        None => {
            let registered = Command::set_global_application_commands(http, |commands| {
                for command in slash_commands {
                    commands.add_application_command(command);
                }
                commands
            })
            .await?;
            info!("Global slash commands registered successfully");
            registered
        }
    };

    Ok(registered)
}

/// Deletes previously registered commands. Keeps going past individual
/// failures and reports how many could not be removed.
pub async fn remove_commands(http: &Arc<Http>, guild_id: Option<GuildId>, commands: &[Command]) -> Result<()> {
    let mut failed = 0;

    for command in commands {
        let result = match guild_id {
            Some(guild_id) => guild_id.delete_application_command(http, command.id).await,
            None => Command::delete_global_application_command(http, command.id).await,
        };

        match result {
            Ok(()) => info!("Removed '{}' command", command.name),
            Err(e) => {
                warn!("Cannot delete '{}' command: {}", command.name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} commands could not be removed", failed, commands.len());
    }
    Ok(())
}

/// Collects every string-valued option of an invocation.
pub fn collect_string_options(options: &[CommandDataOption]) -> CommandOptions {
    options
        .iter()
        .filter_map(|opt| {
            opt.value
                .as_ref()
                .and_then(|val| val.as_str())
                .map(|s| (opt.name.clone(), s.to_string()))
        })
        .collect()
}

pub(crate) fn required_option<'a>(options: &'a CommandOptions, name: &'static str) -> Result<&'a str, RankError> {
    options
        .get(name)
        .map(String::as_str)
        .ok_or(RankError::OptionMissing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, Region};
    use serde_json::Value;

    fn options(pairs: &[(&str, &str)]) -> CommandOptions {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn option_json(command: &CreateApplicationCommand) -> Vec<Value> {
        command
            .0
            .get("options")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_create_slash_commands() {
        let commands = create_slash_commands();
        assert_eq!(commands.len(), 2);

        let command_names: Vec<String> = commands
            .iter()
            .map(|cmd| cmd.0.get("name").unwrap().as_str().unwrap().to_string())
            .collect();

        assert_eq!(command_names, vec!["rlrank", "valrank"]);
    }

    #[test]
    fn test_rlrank_options() {
        let options = option_json(&RankCommand::RocketLeague.definition());
        assert_eq!(options.len(), 2);
        assert_eq!(options[0]["name"], "username");
        assert_eq!(options[0]["required"], true);
        assert_eq!(options[1]["name"], "platform");

        let values: Vec<&str> = options[1]["choices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["steam", "epic", "xbl", "psn"]);
    }

    #[test]
    fn test_valrank_options() {
        let options = option_json(&RankCommand::Valorant.definition());
        let names: Vec<&str> = options.iter().map(|o| o["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["username", "tag", "region"]);
        assert!(options.iter().all(|o| o["required"] == true));

        let choices = options[2]["choices"].as_array().unwrap();
        assert_eq!(choices[0]["name"], "North America/South America");
        assert_eq!(choices[0]["value"], "na");
        assert_eq!(choices.len(), 4);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RankCommand::from_name("rlrank"), Some(RankCommand::RocketLeague));
        assert_eq!(RankCommand::from_name("valrank"), Some(RankCommand::Valorant));
        assert_eq!(RankCommand::from_name("ping"), None);
    }

    #[test]
    fn test_parse_rlrank_query() {
        let query = RankCommand::RocketLeague
            .parse_query(&options(&[("username", "Foo"), ("platform", "xbl")]))
            .unwrap();
        assert_eq!(
            query,
            RankQuery::RocketLeague {
                platform: Platform::Xbl,
                username: "Foo".to_string()
            }
        );
    }

    #[test]
    fn test_parse_valrank_query() {
        let query = RankCommand::Valorant
            .parse_query(&options(&[("username", "Bar"), ("tag", "EUW"), ("region", "eu")]))
            .unwrap();
        assert_eq!(
            query,
            RankQuery::Valorant {
                region: Region::Eu,
                username: "Bar".to_string(),
                tag: "EUW".to_string()
            }
        );
    }

    #[test]
    fn test_parse_query_missing_option() {
        let err = RankCommand::Valorant
            .parse_query(&options(&[("username", "Bar"), ("region", "eu")]))
            .unwrap_err();
        assert!(matches!(err, RankError::OptionMissing("tag")), "got {:?}", err);
    }

    #[test]
    fn test_parse_query_rejects_unknown_choice() {
        let err = RankCommand::RocketLeague
            .parse_query(&options(&[("username", "Foo"), ("platform", "switch")]))
            .unwrap_err();
        assert!(
            matches!(err, RankError::InvalidOption { option: "platform", ref value } if value == "switch"),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_collect_string_options_empty() {
        assert!(collect_string_options(&[]).is_empty());
    }
}
