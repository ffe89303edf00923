//! Ticket API endpoints.
//!
//! - `GET /tickets` - list all tickets
//! - `POST /tickets` - create a ticket
//! - `POST /tickets/buy` - buy a ticket (at-most-once under concurrency)

use crate::server::error::AppError;
use crate::server::state::AppState;
use crate::types::{NewTicket, Ticket};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request/Response Types
// ============================================================================

/// A ticket as returned to clients.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketResponse {
    /// Ticket id
    pub id: i64,
    /// Ticket price
    pub price: i64,
    /// Whether the ticket has been sold
    pub is_sold: bool,
    /// Buyer identity, if sold
    pub sold_to: Option<String>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            price: ticket.price,
            is_sold: ticket.is_sold,
            sold_to: ticket.sold_to,
        }
    }
}

/// Response for listing tickets.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    /// All tickets in creation order
    pub tickets: Vec<TicketResponse>,
}

/// Request to buy a ticket.
#[derive(Debug, Deserialize)]
pub struct BuyTicketRequest {
    /// Id of the ticket to buy
    pub ticket_id: i64,
    /// Buyer identity
    pub user: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all tickets.
///
/// ```bash
/// curl http://localhost:8080/tickets
/// # {"tickets":[{"id":1,"price":100,"is_sold":false,"sold_to":null}]}
/// ```
pub async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<ListTicketsResponse>, AppError> {
    let tickets = state.store.list_all().await?;

    Ok(Json(ListTicketsResponse {
        tickets: tickets.into_iter().map(TicketResponse::from).collect(),
    }))
}

/// Create a new ticket.
///
/// Returns 201 with the full created record, including its assigned id.
///
/// ```bash
/// curl -X POST http://localhost:8080/tickets \
///   -H "Content-Type: application/json" \
///   -d '{"price": 100}'
/// ```
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<NewTicket>,
) -> Result<(StatusCode, Json<TicketResponse>), AppError> {
    let ticket = state.store.create(request).await?;

    Ok((StatusCode::CREATED, Json(TicketResponse::from(ticket))))
}

/// Buy a ticket.
///
/// Returns 200 with the updated ticket when this call wins the sale, 404
/// when the id does not exist, 409 when the ticket has already been sold
/// (including to a concurrent buyer).
///
/// ```bash
/// curl -X POST http://localhost:8080/tickets/buy \
///   -H "Content-Type: application/json" \
///   -d '{"ticket_id": 1, "user": "alice"}'
/// ```
pub async fn buy_ticket(
    State(state): State<AppState>,
    Json(request): Json<BuyTicketRequest>,
) -> Result<Json<TicketResponse>, AppError> {
    let ticket = state
        .coordinator
        .buy(request.ticket_id, &request.user)
        .await?;

    Ok(Json(TicketResponse::from(ticket)))
}
