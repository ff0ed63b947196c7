pub mod chart;
pub mod commands;
pub mod config;
pub mod format;
pub mod locale;
pub mod state;
pub mod token;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
