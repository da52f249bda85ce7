use anyhow::Result;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use rankbot::commands::{register_commands, remove_commands, CommandHandler};
use rankbot::config::Config;
use rankbot::stats_client::StatsClient;

struct Handler {
    command_handler: Arc<CommandHandler>,
    guild_id: Option<GuildId>,
    registered: Arc<Mutex<Vec<Command>>>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {}#{} is connected and ready!", ready.user.name, ready.user.discriminator);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Ready fires again after a reconnect; commands only need registering once
        let mut registered = self.registered.lock().await;
        if !registered.is_empty() {
            return;
        }

        info!("Adding commands...");
        match register_commands(&ctx.http, self.guild_id).await {
            Ok(commands) => {
                info!("✅ Registered {} slash commands", commands.len());
                *registered = commands;
            }
            Err(e) => error!("❌ Failed to register slash commands: {}", e),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                // The handler has already spent its one edit by the time an error gets here
                if let Err(e) = self.command_handler.handle_slash_command(&ctx, &command).await {
                    error!("Error handling slash command '{}': {}", command.data.name, e);
                }
            }
            Interaction::Ping(_) => {
                info!("Ping interaction received - Discord health check");
            }
            Interaction::MessageComponent(component) => {
                warn!("Ignoring component interaction '{}'", component.data.custom_id);
            }
            Interaction::ModalSubmit(modal) => {
                warn!("Ignoring modal submit '{}'", modal.data.custom_id);
            }
            Interaction::Autocomplete(autocomplete) => {
                warn!("Ignoring autocomplete for command: {}", autocomplete.data.name);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting rank bot...");

    let stats_client = StatsClient::new(&config.rl_api_base, &config.val_api_base, config.request_timeout)?;
    let command_handler = CommandHandler::new(Arc::new(stats_client));
    let guild_id = config.guild_id.map(GuildId);
    let registered = Arc::new(Mutex::new(Vec::new()));

    let handler = Handler {
        command_handler: Arc::new(command_handler),
        guild_id,
        registered: registered.clone(),
    };

    // Slash commands arrive as interactions; no message intents needed
    let mut client = Client::builder(&config.discord_token, GatewayIntents::empty())
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {}", e);
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Could not listen for Ctrl+C: {}", e);
            return;
        }
        info!("Shutdown requested");
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Press Ctrl+C to exit");
    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {:?}", why);
        return Err(anyhow::anyhow!("Failed to establish gateway connection: {}", why));
    }

    if config.remove_commands {
        info!("Removing commands...");
        let commands = registered.lock().await;
        if let Err(e) = remove_commands(&client.cache_and_http.http, guild_id, &commands).await {
            error!("{}", e);
        }
    }

    info!("Gracefully shutting down.");
    Ok(())
}
