use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Bounds how many independent requests are in flight at once.
pub struct AdmissionGate {
    permits: Arc<Semaphore>,
}

impl AdmissionGate {
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    pub async fn admit(&self) -> AdmissionPermit {
        // Semaphore acquire should never fail unless the semaphore is closed,
        // which should never happen in normal operation. If it does, it's a bug.
        let permit = self.permits.clone().acquire_owned().await.unwrap_or_else(|_| {
            panic!("admission semaphore closed unexpectedly. This is a bug - please report it.");
        });
        AdmissionPermit { _permit: permit }
    }
}

pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}
