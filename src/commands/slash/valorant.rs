//! Valorant slash command: /valrank

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use super::{required_option, CommandOptions};
use crate::error::RankError;
use crate::models::{RankQuery, Region};

pub const NAME: &str = "valrank";

/// Creates the valrank command
pub fn create_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(NAME)
        .description("Get users Valorant rank")
        .create_option(|option| {
            option
                .name("username")
                .description("Username")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("tag")
                .description("Tag after #")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("region")
                .description("Region")
                .kind(CommandOptionType::String)
                .required(true);
            for region in Region::ALL {
                option.add_string_choice(region.label(), region.as_str());
            }
            option
        })
        .to_owned()
}

pub fn parse_query(options: &CommandOptions) -> Result<RankQuery, RankError> {
    let username = required_option(options, "username")?;
    let tag = required_option(options, "tag")?;
    let region = required_option(options, "region")?;

    let region = Region::from_str(region).ok_or_else(|| RankError::InvalidOption {
        option: "region",
        value: region.to_string(),
    })?;

    Ok(RankQuery::Valorant {
        region,
        username: username.to_string(),
        tag: tag.to_string(),
    })
}
