//! JSON response construction and error mapping.
//!
//! Every JSON body goes through [`json_response`]. If encoding fails the
//! failure is logged and the client gets a bare 500 with no body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use chirpy_core::error::{ChirpyError, ClientCode};
use chirpy_core::protocol::chirp::ErrorBody;

pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "error marshalling JSON");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Handler error rendered as `{"error": <message>}`.
#[derive(Debug)]
pub struct ApiError(pub ChirpyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::ChirpTooLong => StatusCode::BAD_REQUEST,
            // malformed bodies are reported as 500, not 400
            ClientCode::MalformedBody
            | ClientCode::BadConfig
            | ClientCode::UnsupportedVersion
            | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChirpyError> for ApiError {
    fn from(err: ChirpyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(
            code = self.0.client_code().as_str(),
            status = status.as_u16(),
            error = %self.0,
            "request rejected"
        );
        json_response(status, &ErrorBody::from(&self.0))
    }
}
