//! HTTP API handlers.

pub mod tickets;
