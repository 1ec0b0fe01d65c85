//! HR service routes

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use common::validation;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    extract::ValidatedJson,
    models::{
        ClockEntryInput, ConfirmPasswordReset, CreateTeamRequest, RequestPasswordReset,
        UpdateTeamRequest,
    },
};

/// Create the router for the HR service
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/clock", post(submit_clock_entry))
        .route("/teams", post(create_team))
        .route("/teams/:id", patch(update_team))
        .route("/auth/password/forgot", post(request_password_reset))
        .route("/auth/password/reset", post(confirm_password_reset))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "hr-service"
    }))
}

/// Accept a clock-in/out entry
pub async fn submit_clock_entry(
    ValidatedJson(entry): ValidatedJson<ClockEntryInput>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Accepted clock entry (status: {:?})", entry.status);

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"message": "Clock entry accepted"})),
    ))
}

/// Accept a new team
pub async fn create_team(
    ValidatedJson(team): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Accepted team {:?} for creation", team.name);

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"message": "Team accepted for creation"})),
    ))
}

/// Accept a partial update for a team
pub async fn update_team(
    Path(id): Path<i64>,
    ValidatedJson(_update): ValidatedJson<UpdateTeamRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::positive("Team id", id)
        .map_err(|_| ApiError::BadRequest("Team id must be a positive number".to_string()))?;

    tracing::info!("Accepted update for team {}", id);

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"message": "Team update accepted"})),
    ))
}

/// Accept a password reset request
pub async fn request_password_reset(
    ValidatedJson(_request): ValidatedJson<RequestPasswordReset>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Password reset requested");

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"message": "If the account exists, a reset email is on its way"})),
    ))
}

/// Accept a password reset confirmation
pub async fn confirm_password_reset(
    ValidatedJson(_confirmation): ValidatedJson<ConfirmPasswordReset>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("Password reset confirmed");

    Ok(StatusCode::NO_CONTENT)
}
