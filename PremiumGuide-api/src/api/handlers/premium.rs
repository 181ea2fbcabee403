use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};
use validator::Validate;

use premium_guide_domain::entities::profile::{compute_bmi, ProfileInput};
use premium_guide_domain::services::insights::categorize_bmi;
use premium_guide_domain::services::estimate;

use crate::api::handlers::errors::ErrorResponse;
use crate::api::state::AppState;
use crate::entities::bmi::{BmiQuery, BmiResponse};

/// Get the current form session
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current session view", body = premium_guide_domain::services::SessionView),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "session"
)]
#[instrument(skip(state))]
pub async fn get_session(State(state): State<AppState>) -> Result<impl IntoResponse, ErrorResponse> {
    let session = state.lock_session()?;
    let view = session.view(state.service.as_ref());
    Ok((StatusCode::OK, Json(view)))
}

/// Replace the session inputs
///
/// Unlike the HTML form, out-of-range values are rejected rather than clamped.
#[utoipa::path(
    put,
    path = "/api/v1/session/profile",
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Inputs applied", body = premium_guide_domain::services::SessionView),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "session"
)]
#[instrument(skip(state))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<impl IntoResponse, ErrorResponse> {
    state.service.validate_input(&input)?;

    let mut session = state.lock_session()?;
    session.apply_input(input);
    let view = session.view(state.service.as_ref());
    Ok((StatusCode::OK, Json(view)))
}

/// Predict the premium for the current session inputs
#[utoipa::path(
    post,
    path = "/api/v1/session/predict",
    responses(
        (status = 200, description = "Prediction computed", body = premium_guide_domain::services::SessionView),
        (status = 500, description = "Prediction failed", body = ErrorResponse),
    ),
    tag = "session"
)]
#[instrument(skip(state))]
pub async fn predict_session(State(state): State<AppState>) -> Result<impl IntoResponse, ErrorResponse> {
    let mut session = state.lock_session()?;
    session.predict(state.service.as_ref())?;
    let view = session.view(state.service.as_ref());
    Ok((StatusCode::OK, Json(view)))
}

/// Restore the default inputs and drop any prediction
#[utoipa::path(
    post,
    path = "/api/v1/session/reset",
    responses(
        (status = 200, description = "Session reset", body = premium_guide_domain::services::SessionView),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "session"
)]
#[instrument(skip(state))]
pub async fn reset_session(State(state): State<AppState>) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Resetting form session");
    let mut session = state.lock_session()?;
    session.reset();
    let view = session.view(state.service.as_ref());
    Ok((StatusCode::OK, Json(view)))
}

/// One-shot estimate that leaves the session untouched
#[utoipa::path(
    post,
    path = "/api/v1/premium/estimate",
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Full estimate for the given inputs", body = premium_guide_domain::services::SessionView),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Prediction failed", body = ErrorResponse),
    ),
    tag = "premium"
)]
#[instrument(skip(state))]
pub async fn estimate_premium(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let view = estimate(input, state.service.as_ref())?;
    Ok((StatusCode::OK, Json(view)))
}

/// Compute a BMI and its category from height and weight
#[utoipa::path(
    get,
    path = "/api/v1/bmi",
    params(BmiQuery),
    responses(
        (status = 200, description = "BMI and category", body = BmiResponse),
        (status = 400, description = "Height or weight out of range", body = ErrorResponse),
    ),
    tag = "premium"
)]
#[instrument]
pub async fn calculate_bmi(Query(query): Query<BmiQuery>) -> Result<impl IntoResponse, ErrorResponse> {
    if let Err(errors) = query.validate() {
        let details = serde_json::to_value(&errors).ok();
        return Err(ErrorResponse::validation_error("Height or weight out of range", details));
    }

    let bmi = compute_bmi(query.height_cm, query.weight_kg);
    Ok((
        StatusCode::OK,
        Json(BmiResponse {
            bmi,
            category: categorize_bmi(bmi),
        }),
    ))
}
