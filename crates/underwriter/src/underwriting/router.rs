//! HTTP surface for the underwriting tools.
//!
//! Handlers stay thin: deserialize the argument map, call the pure
//! component, forward the JSON result unchanged. Argument failures become
//! `{"error": "..."}` bodies; nothing here can panic on caller input.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::args::{ArgumentError, ToolArguments};
use super::UnderwritingService;

/// Router builder exposing one route per pipeline tool.
pub fn underwriting_router(service: Arc<UnderwritingService>) -> Router {
    Router::new()
        .route("/api/v1/underwriting/validate", post(validate_handler))
        .route("/api/v1/underwriting/risk-profile", post(risk_profile_handler))
        .route("/api/v1/underwriting/assessment", post(assessment_handler))
        .route("/api/v1/underwriting/terms", post(terms_handler))
        .route("/api/v1/underwriting/decision", post(decision_handler))
        .route(
            "/api/v1/underwriting/vehicles/:vehicle_type",
            get(vehicle_profile_handler),
        )
        .with_state(service)
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<UnderwritingService>>,
    Json(payload): Json<Value>,
) -> Response {
    match ToolArguments::from_value(payload) {
        Ok(args) => {
            let report = service.validate(&args);
            debug!(is_valid = report.is_valid, "validation completed");
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => argument_error(err),
    }
}

pub(crate) async fn risk_profile_handler(
    State(service): State<Arc<UnderwritingService>>,
    Json(payload): Json<Value>,
) -> Response {
    respond(ToolArguments::from_value(payload).and_then(|args| service.risk_profile(&args)))
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<UnderwritingService>>,
    Json(payload): Json<Value>,
) -> Response {
    respond(ToolArguments::from_value(payload).and_then(|args| service.assessment(&args)))
}

pub(crate) async fn terms_handler(
    State(service): State<Arc<UnderwritingService>>,
    Json(payload): Json<Value>,
) -> Response {
    respond(ToolArguments::from_value(payload).and_then(|args| service.loan_terms(&args)))
}

pub(crate) async fn decision_handler(
    State(service): State<Arc<UnderwritingService>>,
    Json(payload): Json<Value>,
) -> Response {
    respond(ToolArguments::from_value(payload).and_then(|args| service.decision(&args)))
}

pub(crate) async fn vehicle_profile_handler(
    State(service): State<Arc<UnderwritingService>>,
    Path(vehicle_type): Path<String>,
) -> Response {
    // Lookup is total, so this endpoint always answers 200.
    let profile = service.vehicle_profile(&vehicle_type);
    (StatusCode::OK, Json(profile)).into_response()
}

fn respond<T: Serialize>(result: Result<T, ArgumentError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => argument_error(err),
    }
}

fn argument_error(err: ArgumentError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
