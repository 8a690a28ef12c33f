use super::env::EnvConfig;
use super::toml_config::TomlConfig;
use super::{ConfigOverrides, TrackerConfig};
use crate::core::{Scope, Theme};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "parcel-track")]
#[command(about = "국내.외 택배조회: look up domestic and international parcels")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sweet Tracker API key (defaults to TRACKER_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the carrier directory endpoint
    #[arg(long)]
    pub directory_endpoint: Option<String>,

    /// Override the tracking info endpoint
    #[arg(long)]
    pub tracking_endpoint: Option<String>,

    /// Theme: default, salmon or blue
    #[arg(long)]
    pub theme: Option<Theme>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List carriers, optionally only one scope
    Carriers {
        #[arg(long)]
        scope: Option<Scope>,
    },
    /// Look up a tracking number
    Track {
        #[arg(long, default_value = "domestic")]
        scope: Scope,

        /// Carrier code from the scope's list (defaults to the scope's default carrier)
        #[arg(long)]
        carrier: Option<String>,

        /// Tracking number; non-digit characters are dropped
        #[arg(long)]
        invoice: String,
    },
    /// List themes and their palettes
    Themes,
}

impl CliConfig {
    pub fn needs_api(&self) -> bool {
        !matches!(self.command, Command::Themes)
    }

    pub fn resolve(&self) -> Result<TrackerConfig> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;

        TrackerConfig::resolve(
            EnvConfig::from_env(),
            file,
            ConfigOverrides {
                api_key: self.api_key.clone(),
                directory_endpoint: self.directory_endpoint.clone(),
                tracking_endpoint: self.tracking_endpoint.clone(),
                theme: self.theme,
            },
        )
    }
}
