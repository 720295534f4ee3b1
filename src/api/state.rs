//! Application state for the Custody Schedule Engine API.

use std::sync::Arc;

use crate::engine::CustodyEngine;

/// Shared application state.
///
/// Holds the engine behind an `Arc`; the engine swaps its own configuration
/// snapshot on reload, so the state never changes after startup.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<CustodyEngine>,
}

impl AppState {
    /// Creates a new application state around `engine`.
    pub fn new(engine: CustodyEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &CustodyEngine {
        &self.engine
    }
}
