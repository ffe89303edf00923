//! Purchase coordination.
//!
//! [`PurchaseCoordinator::buy`] orchestrates a single buy request: look the
//! ticket up for a friendly not-found error, then let the store's
//! conditional update decide the sale. The coordinator holds no mutable
//! state between calls, so any number of requests may run it concurrently
//! without coordinator-level locking.

use crate::error::{Result, TicketError};
use crate::store::TicketStore;
use crate::types::Ticket;
use std::sync::Arc;

/// Orchestrates buy requests and classifies their outcomes.
#[derive(Clone)]
pub struct PurchaseCoordinator {
    store: Arc<dyn TicketStore>,
}

impl PurchaseCoordinator {
    /// Create a coordinator over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// Attempt to buy a ticket for `buyer`.
    ///
    /// Exactly one of three outcomes:
    /// - `Ok(ticket)` with `is_sold = true, sold_to = buyer`: this call
    ///   won the sale;
    /// - `Err(TicketError::NotFound)`: the id does not exist;
    /// - `Err(TicketError::AlreadySold)`: the conditional update matched
    ///   zero rows, whether the ticket sold long ago or to a concurrent
    ///   buyer an instant before. The coordinator does not distinguish the
    ///   two; the conditional update is the sole arbiter.
    ///
    /// The existence check only improves the error message. A ticket found
    /// here but sold before the update executes still resolves to
    /// `AlreadySold`, never to an overwritten sale.
    ///
    /// # Errors
    ///
    /// `NotFound`, `AlreadySold`, or `Database` on store failure.
    pub async fn buy(&self, ticket_id: i64, buyer: &str) -> Result<Ticket> {
        if self.store.get_by_id(ticket_id).await?.is_none() {
            tracing::debug!(ticket_id, "Buy attempt for unknown ticket");
            return Err(TicketError::NotFound);
        }

        if !self.store.mark_sold_if_unsold(ticket_id, buyer).await? {
            tracing::info!(ticket_id, buyer, "Buy attempt lost: ticket already sold");
            metrics::counter!("tickets.buy_conflicts").increment(1);
            return Err(TicketError::AlreadySold);
        }

        tracing::info!(ticket_id, buyer, "Ticket sold");
        metrics::counter!("tickets.sold").increment(1);

        // Re-read so the response reflects exactly what was persisted.
        self.store
            .get_by_id(ticket_id)
            .await?
            .ok_or(TicketError::NotFound)
    }
}
