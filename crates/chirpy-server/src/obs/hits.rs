use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Increment the hit counter, then delegate.
pub async fn count_hits(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.hits().increment();
    next.run(req).await
}
