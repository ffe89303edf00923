//! HTTP server module.
//!
//! Provides the axum-based server wiring:
//! - Application state management
//! - Health check endpoints
//! - Error-to-response mapping
//! - Router configuration

pub mod error;
pub mod health;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;
