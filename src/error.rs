//! Error types for ticket operations.

use thiserror::Error;

/// Result type alias for ticket operations.
pub type Result<T> = std::result::Result<T, TicketError>;

/// Error taxonomy for the ticket service.
///
/// `NotFound` and `AlreadySold` are terminal outcomes of a buy attempt and
/// map to distinct HTTP status codes. `Database` wraps any store failure;
/// nothing is retried or swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// The referenced ticket id does not exist.
    #[error("Ticket was not found")]
    NotFound,

    /// The conditional sale update matched zero rows: the ticket was sold
    /// already, whether previously or by a concurrent buyer.
    #[error("Ticket has already been sold")]
    AlreadySold,

    /// A store operation failed.
    #[error("Database error: {0}")]
    Database(String),
}
