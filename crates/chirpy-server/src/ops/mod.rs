//! Operational HTTP endpoints.
//!
//! - `GET /api/healthz`   : liveness
//! - `GET /admin/metrics` : HTML page with the `/app` hit count
//! - `POST /admin/reset`  : zero the hit count

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

pub fn render_metrics(hits: u64) -> String {
    format!(
        r#"
<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"#
    )
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_metrics(state.hits().read());
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], body)
}

pub async fn reset(State(state): State<AppState>) -> StatusCode {
    state.hits().reset();
    tracing::info!("hit counter reset");
    StatusCode::OK
}
