//! In-memory ticket store.
//!
//! Backs unit tests and HTTP handler tests; no database required. The
//! mutex makes `mark_sold_if_unsold` a true compare-and-set: the check and
//! the write happen under one lock acquisition, so concurrent buyers of the
//! same ticket serialize here exactly as they do at the Postgres row.

use crate::error::{Result, TicketError};
use crate::store::TicketStore;
use crate::types::{NewTicket, Ticket};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory ticket store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    tickets: Vec<Ticket>,
}

impl InMemoryTicketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| TicketError::Database("Store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list_all(&self) -> Result<Vec<Ticket>> {
        Ok(self.lock()?.tickets.clone())
    }

    async fn create(&self, new: NewTicket) -> Result<Ticket> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let ticket = Ticket {
            id: inner.next_id,
            price: new.price,
            is_sold: new.is_sold,
            sold_to: new.sold_to,
        };
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Ticket>> {
        Ok(self.lock()?.tickets.iter().find(|t| t.id == id).cloned())
    }

    async fn mark_sold_if_unsold(&self, id: i64, buyer: &str) -> Result<bool> {
        let mut inner = self.lock()?;
        match inner.tickets.iter_mut().find(|t| t.id == id && !t.is_sold) {
            Some(ticket) => {
                ticket.is_sold = true;
                ticket.sold_to = Some(buyer.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_defaults() {
        let store = InMemoryTicketStore::new();

        let a = store.create(NewTicket::with_price(100)).await.unwrap();
        let b = store.create(NewTicket::with_price(200)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(!a.is_sold);
        assert_eq!(a.sold_to, None);
        assert_eq!(a.price, 100);
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let store = InMemoryTicketStore::new();
        for price in [100, 200, 150] {
            store.create(NewTicket::with_price(price)).await.unwrap();
        }

        let tickets = store.list_all().await.unwrap();
        let prices: Vec<i64> = tickets.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![100, 200, 150]);
    }

    #[tokio::test]
    async fn list_all_on_empty_store_is_empty() {
        let store = InMemoryTicketStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let store = InMemoryTicketStore::new();
        assert_eq!(store.get_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn mark_sold_applies_exactly_once() {
        let store = InMemoryTicketStore::new();
        let ticket = store.create(NewTicket::with_price(100)).await.unwrap();

        assert!(store.mark_sold_if_unsold(ticket.id, "alice").await.unwrap());
        assert!(!store.mark_sold_if_unsold(ticket.id, "bob").await.unwrap());

        let stored = store.get_by_id(ticket.id).await.unwrap().unwrap();
        assert!(stored.is_sold);
        assert_eq!(stored.sold_to.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn mark_sold_on_missing_id_changes_nothing() {
        let store = InMemoryTicketStore::new();
        assert!(!store.mark_sold_if_unsold(42, "alice").await.unwrap());
    }
}
