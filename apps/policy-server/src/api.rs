//! API handlers for the policy server
//!
//! Provides REST endpoints for:
//! - Health and version reporting
//! - Policy document validation

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use policy_types::ValidationResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub vessels_loaded: usize,
}

/// Handler: GET /health
///
/// Reports `degraded` while the vessel registry is empty, since every
/// document would then fail the vessel check.
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let vessels_loaded = state.validator.registry().len();
    Json(HealthResponse {
        status: if vessels_loaded == 0 { "degraded" } else { "ok" },
        service: "policy-server",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.env.as_str(),
        vessels_loaded,
    })
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Handler: GET /version
pub async fn handle_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Validation request body
#[derive(Deserialize)]
pub struct ValidateRequest {
    /// Plain-text policy document
    pub text: String,
}

/// Handler: POST /validate
pub async fn handle_validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, ServerError> {
    let Json(request) = payload?;

    if request.text.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "text must not be empty".to_string(),
        ));
    }

    let chars = request.text.chars().count();
    if chars > state.max_text_chars {
        warn!(
            "Rejecting document of {} characters (limit {})",
            chars, state.max_text_chars
        );
        return Err(ServerError::InvalidRequest(format!(
            "text is {} characters long (maximum {})",
            chars, state.max_text_chars
        )));
    }

    debug!("Validating document ({} characters)", chars);
    let result = state.validator.validate(&request.text);

    info!(
        "Validated document: is_valid={}, violations={}",
        result.is_valid(),
        result.violations().len()
    );

    Ok(Json(result))
}
