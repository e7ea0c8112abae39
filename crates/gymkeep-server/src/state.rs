use std::sync::Arc;

use gymkeep_core::GymService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GymService>,
}

impl AppState {
    pub fn new(service: GymService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
