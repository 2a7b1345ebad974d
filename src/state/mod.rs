use std::sync::Arc;
use std::time::Instant;

use crate::pet_catalog::PetAvailabilityChecker;
use crate::store::AdoptionRequestStore;

/// Shared handles for request handlers. Cloned per request; nothing in here
/// is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AdoptionRequestStore>,
    pub pet_catalog: Arc<dyn PetAvailabilityChecker>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<dyn AdoptionRequestStore>,
        pet_catalog: Arc<dyn PetAvailabilityChecker>,
    ) -> Self {
        Self {
            store,
            pet_catalog,
            start_time: Instant::now(),
        }
    }
}
