//! # Command System
//!
//! Slash command definitions for the rank lookups, plus the helpers that
//! turn raw interaction options into a [`RankQuery`](crate::models::RankQuery).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: `/rlrank` and `/valrank`

pub mod slash;

pub use crate::command_handler::CommandHandler;

pub use slash::{
    collect_string_options, create_slash_commands, register_commands, remove_commands,
    CommandOptions, RankCommand,
};
