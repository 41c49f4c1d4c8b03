pub mod background;
pub mod commands;
pub mod config;
pub mod fixtures;
pub mod formatting;
pub mod provider;
pub mod tui;
pub mod types;
