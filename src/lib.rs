//! Small ticket-sales service.
//!
//! Tickets are listed, created, and bought over HTTP. The one piece of real
//! logic is the buy operation: a ticket may be sold at most once, even when
//! many purchase attempts race on the same id. The sale is decided by a
//! single conditional write in the store (`mark_sold_if_unsold`), never by
//! state read in application code.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────┐
//! │        HTTP (axum)             │  ← routing, JSON, status codes
//! ├────────────────────────────────┤
//! │     PurchaseCoordinator        │  ← lookup + conditional update,
//! │                                │    outcome classification
//! ├────────────────────────────────┤
//! │     TicketStore trait          │  ← Postgres in production,
//! │                                │    in-memory for tests
//! └────────────────────────────────┘
//! ```
//!
//! The store is constructed in `main` and injected through [`server::AppState`];
//! there is no module-level state anywhere.

pub mod api;
pub mod config;
pub mod error;
pub mod purchase;
pub mod server;
pub mod store;
pub mod types;

pub use error::TicketError;
pub use purchase::PurchaseCoordinator;
pub use store::{InMemoryTicketStore, PostgresTicketStore, TicketStore};
pub use types::{NewTicket, Ticket};
