//! Ticket storage.
//!
//! The [`TicketStore`] trait is the seam between the purchase logic and
//! persistence. The production implementation is [`PostgresTicketStore`];
//! [`InMemoryTicketStore`] backs unit and HTTP handler tests.
//!
//! The one non-trivial operation is [`TicketStore::mark_sold_if_unsold`]:
//! a single conditional write that only applies while the row is still
//! unsold. It is the sole arbiter of whether a sale happened; callers must
//! never decide a sale from a previously read `is_sold` value.

mod memory;
mod postgres;

pub use memory::InMemoryTicketStore;
pub use postgres::PostgresTicketStore;

use crate::error::Result;
use crate::types::{NewTicket, Ticket};
use async_trait::async_trait;

/// Durable record of tickets with a concurrency-safe sale primitive.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// All tickets in insertion order. An empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Ticket>>;

    /// Insert a new ticket, assigning a fresh unique id, and return the
    /// full created record.
    async fn create(&self, new: NewTicket) -> Result<Ticket>;

    /// Fetch a ticket by id, or `None` if it does not exist.
    async fn get_by_id(&self, id: i64) -> Result<Option<Ticket>>;

    /// Atomically set `is_sold = true, sold_to = buyer`, but only if the
    /// ticket is currently unsold. Returns whether exactly one row changed.
    ///
    /// This must be one conditional write (a compare-and-set against
    /// persisted state), never a read followed by a write, so that two
    /// concurrent callers racing on the same id can never both succeed.
    async fn mark_sold_if_unsold(&self, id: i64, buyer: &str) -> Result<bool>;

    /// Cheap liveness probe against the backing storage.
    async fn ping(&self) -> Result<()>;
}
