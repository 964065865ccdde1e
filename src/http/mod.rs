//! HTTP server module for the parking backend.
//!
//! This module provides an axum-based HTTP server that exposes the parking
//! engine as a small REST API. The HTTP layer is a thin wrapper: it parses
//! requests, takes the engine lock, and renders the engine's result messages.
//!
//! Business-rule failures (invalid type, duplicate plate, no slots, unknown
//! plate) are returned as 200 responses with the message in the `result`
//! field; only malformed requests produce error status codes. Clients of the
//! legacy API depend on this.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
