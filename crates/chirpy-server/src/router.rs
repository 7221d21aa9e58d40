//! Axum router wiring.
//!
//! `/app` is a `ServeDir` over the configured file root, wrapped by the hit
//! counting middleware. The bare `/app` redirect is answered before counting.
//! Everything else is a plain route.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::http::redirect::{self, APP_PREFIX};
use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let files = ServiceBuilder::new()
        .layer(middleware::from_fn(redirect::redirect_bare_prefix))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::hits::count_hits,
        ))
        .layer(middleware::from_fn(redirect::keep_prefix_on_redirect))
        .service(ServeDir::new(&state.cfg().server.file_root));

    Router::new()
        .nest_service(APP_PREFIX, files)
        .route("/api/healthz", get(ops::healthz))
        .route("/api/validate_chirp", post(api::chirps::validate_chirp))
        .route("/admin/metrics", get(ops::metrics))
        .route("/admin/reset", post(ops::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
