pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{ConfigOverrides, TrackerConfig};

pub use adapters::http::SweetTrackerClient;
pub use core::{
    app::TrackerApp, directory::CarrierDirectoryLoader, selection::SelectionController, Carrier,
    Scope, Theme,
};
pub use utils::error::{Result, TrackerError};
