//! HTTP request handlers for the Custody Schedule Engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler tags its log lines with a fresh correlation id.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

use super::request::{DEFAULT_HOLIDAY_DAYS, DEFAULT_SCHOOL_EVENT_DAYS, DateQuery, LookaheadQuery};
use super::response::{ApiError, ApiErrorResponse, ReloadResponse, StatusResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/custody/status", get(custody_status_handler))
        .route("/custody/transition", get(next_transition_handler))
        .route("/custody/week", get(week_summary_handler))
        .route("/holidays/upcoming", get(upcoming_holidays_handler))
        .route("/context", get(context_handler))
        .route("/school/session", get(school_session_handler))
        .route("/school/events", get(school_events_handler))
        .route("/config/reload", post(reload_handler))
        .with_state(state)
}

/// Handler for GET /custody/status.
async fn custody_status_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let engine = state.engine();
    let result = engine
        .custody_resolution(query.date)
        .map(|resolution| StatusResponse {
            party_name: engine.display().name_of(resolution.party).to_string(),
            resolution,
        });
    json_response(correlation_id, "custody_status", result)
}

/// Handler for GET /custody/transition.
async fn next_transition_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = state.engine().next_transition(query.date);
    if result.as_ref().is_ok_and(|transition| transition.fallback) {
        warn!(
            correlation_id = %correlation_id,
            date = %query.date,
            "No custody change in scan window; returning next weekend"
        );
    }
    json_response(correlation_id, "next_transition", result)
}

/// Handler for GET /custody/week.
async fn week_summary_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    json_response(
        correlation_id,
        "week_summary",
        state.engine().week_summary(query.date),
    )
}

/// Handler for GET /holidays/upcoming.
async fn upcoming_holidays_handler(
    State(state): State<AppState>,
    query: Result<Query<LookaheadQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let days = query.days_or(DEFAULT_HOLIDAY_DAYS);
    json_response(
        correlation_id,
        "upcoming_holidays",
        state.engine().upcoming_holidays(query.date, days),
    )
}

/// Handler for GET /context.
///
/// Returns plain text; the body is empty when no schedule is configured.
async fn context_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let text = state.engine().schedule_context_text(query.date);
    info!(
        correlation_id = %correlation_id,
        date = %query.date,
        bytes = text.len(),
        "Rendered schedule context"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}

/// Handler for GET /school/session.
async fn school_session_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    json_response(
        correlation_id,
        "school_session",
        state.engine().school_session_info(query.date),
    )
}

/// Handler for GET /school/events.
async fn school_events_handler(
    State(state): State<AppState>,
    query: Result<Query<LookaheadQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let days = query.days_or(DEFAULT_SCHOOL_EVENT_DAYS);
    json_response(
        correlation_id,
        "school_events",
        state.engine().upcoming_school_events(query.date, days),
    )
}

/// Handler for POST /config/reload.
async fn reload_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Reloading configuration");

    let engine = state.engine();
    let result = engine.reload_configuration().map(|()| ReloadResponse {
        status: "reloaded".to_string(),
        generation: engine.generation(),
    });
    json_response(correlation_id, "reload", result)
}

/// Unwraps query extraction, turning a rejection into a 400 response.
fn parse_query<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, Response> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid query string"
            );
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_query(body_text),
            }
            .into_response())
        }
    }
}

/// Serializes a query result, or maps the engine error to its HTTP status.
fn json_response<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                "Query completed successfully"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "Query failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
