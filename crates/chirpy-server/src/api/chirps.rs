use axum::{extract::State, http::StatusCode, response::Response};
use bytes::Bytes;

use chirpy_core::protocol::chirp::ValidateChirpRequest;

use crate::app_state::AppState;
use crate::http::{json_response, ApiError};

/// `POST /api/validate_chirp`
///
/// The body is taken as raw bytes so that decode failures surface through
/// `ApiError` (as a 500) instead of axum's JSON rejection.
pub async fn validate_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req = ValidateChirpRequest::from_slice(&body)?;
    let cleaned = state.validator().validate(&req.body)?;
    Ok(json_response(StatusCode::OK, &cleaned))
}
