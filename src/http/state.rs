//! Application state for the HTTP server.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::engine::ParkingEngine;

/// Shared application state passed to all handlers.
///
/// The engine is a single instance behind a lock: park and unpark take the
/// write lock so slot occupancy and registry membership change atomically
/// with respect to the read-side queries.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<ParkingEngine>>,
}

impl AppState {
    /// Create a new application state owning the given engine.
    pub fn new(engine: ParkingEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}
