use anyhow::Result;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::{collect_string_options, CommandOptions, RankCommand};
use crate::error::RankError;
use crate::presentation::{failure_output, query_failure_output, success_output, PresentationOutput};
use crate::stats_client::RankSource;

/// The two things a handler may do to an interaction: acknowledge it, and
/// later replace the acknowledgment with the result.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    async fn defer(&self) -> Result<()>;
    async fn edit(&self, output: &PresentationOutput) -> Result<()>;
}

/// Responds through serenity's interaction endpoints.
pub struct SerenityResponder<'a> {
    http: &'a Arc<Http>,
    command: &'a ApplicationCommandInteraction,
}

impl<'a> SerenityResponder<'a> {
    pub fn new(http: &'a Arc<Http>, command: &'a ApplicationCommandInteraction) -> Self {
        SerenityResponder { http, command }
    }
}

#[async_trait]
impl<'a> InteractionResponder for SerenityResponder<'a> {
    async fn defer(&self) -> Result<()> {
        self.command
            .create_interaction_response(self.http, |response| {
                response
                    .kind(InteractionResponseType::DeferredChannelMessageWithSource)
                    .interaction_response_data(|message| message.ephemeral(true))
            })
            .await?;
        Ok(())
    }

    async fn edit(&self, output: &PresentationOutput) -> Result<()> {
        self.command
            .edit_original_interaction_response(self.http, |response| {
                response.embed(|embed| {
                    embed.title(&output.title);
                    if let Some(description) = &output.description {
                        embed.description(description);
                    }
                    if let Some(colour) = output.colour {
                        embed.colour(colour);
                    }
                    embed
                })
            })
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct CommandHandler {
    source: Arc<dyn RankSource>,
}

impl CommandHandler {
    pub fn new(source: Arc<dyn RankSource>) -> Self {
        CommandHandler { source }
    }

    pub async fn handle_slash_command(&self, ctx: &Context, command: &ApplicationCommandInteraction) -> Result<()> {
        info!("Processing slash command: {} from user: {}", command.data.name, command.user.tag());

        let Some(rank_command) = RankCommand::from_name(&command.data.name) else {
            warn!("Received unknown command: {}", command.data.name);
            command
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| message.content("Unknown command.").ephemeral(true))
                })
                .await?;
            return Ok(());
        };

        let options = collect_string_options(&command.data.options);
        let responder = SerenityResponder::new(&ctx.http, command);
        self.run(&responder, rank_command, &options).await?;
        Ok(())
    }

    /// Defers, looks the player up, and edits the deferred response exactly
    /// once. Lookup failures become a failure embed; only a failed edit is
    /// returned as an error.
    pub async fn run(
        &self,
        responder: &dyn InteractionResponder,
        command: RankCommand,
        options: &CommandOptions,
    ) -> Result<PresentationOutput> {
        // Must happen before the stats call so Discord doesn't expire the interaction
        if let Err(e) = responder.defer().await {
            error!("Error sending deferred response: {}", e);
        }

        let output = match self.lookup(command, options).await {
            Ok(output) => output,
            Err(e) => {
                warn!("/{} lookup failed: {}", command.name(), e);
                let username = options.get("username").map(String::as_str).unwrap_or("unknown");
                let tag = command
                    .uses_tag()
                    .then(|| options.get("tag").map(String::as_str).unwrap_or("unknown"));
                failure_output(username, tag)
            }
        };

        responder.edit(&output).await?;
        Ok(output)
    }

    async fn lookup(&self, command: RankCommand, options: &CommandOptions) -> std::result::Result<PresentationOutput, RankError> {
        let query = command.parse_query(options)?;

        match self.source.fetch(&query).await {
            Ok(result) => Ok(success_output(&result)),
            Err(RankError::PlayerNotFound) => {
                info!("No player found for {}", query.username());
                Ok(query_failure_output(&query))
            }
            Err(e) => Err(e),
        }
    }
}
