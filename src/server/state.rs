//! Application state for the HTTP server.

use crate::purchase::PurchaseCoordinator;
use crate::store::TicketStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds the ticket store and the purchase coordinator built over it.
/// Cloned (cheaply via `Arc`) for each request; the store is the only
/// shared resource and the coordinator carries no state of its own.
#[derive(Clone)]
pub struct AppState {
    /// Ticket store used directly by the list/create handlers.
    pub store: Arc<dyn TicketStore>,
    /// Coordinator implementing the buy operation.
    pub coordinator: PurchaseCoordinator,
}

impl AppState {
    /// Build state over an explicitly constructed store.
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        let coordinator = PurchaseCoordinator::new(store.clone());
        Self { store, coordinator }
    }
}
