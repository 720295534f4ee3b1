//! HTTP API module for the Custody Schedule Engine.
//!
//! This module exposes the engine's date-keyed queries as JSON endpoints,
//! plus the rendered context text and a configuration reload trigger.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DEFAULT_HOLIDAY_DAYS, DEFAULT_SCHOOL_EVENT_DAYS, DateQuery, LookaheadQuery};
pub use response::{ApiError, ApiErrorResponse, ReloadResponse, StatusResponse};
pub use state::AppState;
