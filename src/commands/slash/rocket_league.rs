//! Rocket League slash command: /rlrank

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use super::{required_option, CommandOptions};
use crate::error::RankError;
use crate::models::{Platform, RankQuery};

pub const NAME: &str = "rlrank";

/// Creates the rlrank command
pub fn create_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(NAME)
        .description("Get users Rocket League rank")
        .create_option(|option| {
            option
                .name("username")
                .description("Username")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("platform")
                .description("Platform")
                .kind(CommandOptionType::String)
                .required(true);
            for platform in Platform::ALL {
                option.add_string_choice(platform.label(), platform.as_str());
            }
            option
        })
        .to_owned()
}

pub fn parse_query(options: &CommandOptions) -> Result<RankQuery, RankError> {
    let username = required_option(options, "username")?;
    let platform = required_option(options, "platform")?;

    let platform = Platform::from_str(platform).ok_or_else(|| RankError::InvalidOption {
        option: "platform",
        value: platform.to_string(),
    })?;

    Ok(RankQuery::RocketLeague {
        platform,
        username: username.to_string(),
    })
}
