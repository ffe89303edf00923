//! Domain types for the ticket service.

use serde::{Deserialize, Serialize};

/// A sellable ticket.
///
/// Invariant: `is_sold` and `sold_to` flip together, exactly once per
/// ticket. An unsold ticket has `sold_to == None`; a sold ticket always
/// carries its buyer. `Sold` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    /// Unique id, assigned by the store on creation.
    pub id: i64,
    /// Price, set at creation and immutable.
    pub price: i64,
    /// Whether the ticket has been sold.
    pub is_sold: bool,
    /// Buyer identity, present exactly when `is_sold` is true.
    pub sold_to: Option<String>,
}

/// Fields for a ticket about to be inserted.
///
/// The HTTP create endpoint allows pre-filling `is_sold`/`sold_to`, which is
/// useful for seeding sold inventory; plain creation leaves both at their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTicket {
    /// Price of the new ticket.
    pub price: i64,
    /// Initial sold flag, defaults to false.
    #[serde(default)]
    pub is_sold: bool,
    /// Initial buyer, defaults to none.
    #[serde(default)]
    pub sold_to: Option<String>,
}

impl NewTicket {
    /// An unsold ticket with the given price.
    #[must_use]
    pub const fn with_price(price: i64) -> Self {
        Self {
            price,
            is_sold: false,
            sold_to: None,
        }
    }
}
