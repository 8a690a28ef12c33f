use crate::domain::model::Carrier;
use crate::domain::ports::CarrierDirectory;

/// Fetches the carrier directory once and owns the authoritative carrier set.
pub struct CarrierDirectoryLoader<D: CarrierDirectory> {
    directory: D,
    carriers: Vec<Carrier>,
    loaded: bool,
}

impl<D: CarrierDirectory> CarrierDirectoryLoader<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            carriers: Vec::new(),
            loaded: false,
        }
    }

    /// Performs the single directory request of this loader's lifetime.
    ///
    /// Failures are logged and leave the set empty; later calls do nothing.
    pub async fn load(&mut self) -> &[Carrier] {
        if self.loaded {
            tracing::warn!("Carrier directory already loaded, skipping request");
            return &self.carriers;
        }
        self.loaded = true;

        match self.directory.fetch_carriers().await {
            Ok(carriers) => {
                tracing::info!("📦 Loaded {} carriers from directory", carriers.len());
                self.carriers = carriers;
            }
            Err(e) => {
                tracing::error!(
                    "❌ Carrier directory fetch failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::debug!("💡 {}", e.recovery_suggestion());
            }
        }

        &self.carriers
    }

    pub fn authoritative(&self) -> &[Carrier] {
        &self.carriers
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
