pub mod command_handler;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod stats_client;
