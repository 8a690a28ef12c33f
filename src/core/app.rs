use crate::core::directory::CarrierDirectoryLoader;
use crate::core::selection::SelectionController;
use crate::domain::ports::{CarrierDirectory, TrackingService};
use std::sync::Arc;

/// One mounted tracker form: a loaded directory plus its controller.
pub struct TrackerApp<D: CarrierDirectory, T: TrackingService + 'static> {
    loader: CarrierDirectoryLoader<D>,
    controller: SelectionController<T>,
}

impl<D: CarrierDirectory, T: TrackingService + 'static> TrackerApp<D, T> {
    /// Loads the carrier directory (one request) and hands the result to a
    /// fresh controller. Never fails; a failed load yields empty lists.
    pub async fn mount(directory: D, tracker: Arc<T>) -> Self {
        tracing::info!("Mounting tracker");

        let mut loader = CarrierDirectoryLoader::new(directory);
        let carriers = loader.load().await.to_vec();
        let controller = SelectionController::new(carriers, tracker);

        Self { loader, controller }
    }

    pub fn loader(&self) -> &CarrierDirectoryLoader<D> {
        &self.loader
    }

    pub fn controller(&self) -> &SelectionController<T> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<T> {
        &mut self.controller
    }
}
