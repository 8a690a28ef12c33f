pub mod app;
pub mod directory;
pub mod selection;

pub use crate::domain::model::{Carrier, Scope, Theme, ThemePalette};
pub use crate::domain::ports::{CarrierDirectory, ConfigProvider, TrackingService};
pub use crate::utils::error::Result;
