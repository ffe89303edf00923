//! Router configuration.

use crate::api::tickets;
use crate::server::health::{health_check, readiness_check};
use crate::server::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete axum router.
///
/// Routes:
/// - `GET /health`, `GET /ready` - health checks
/// - `GET /tickets` - list all tickets
/// - `POST /tickets` - create a ticket
/// - `POST /tickets/buy` - buy a ticket
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route(
            "/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route("/tickets/buy", post(tickets::buy_ticket))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
