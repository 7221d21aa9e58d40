//! Redirect fix-ups for the `/app` file tree.
//!
//! `ServeDir` only sees the path after the mount prefix is stripped, so its
//! directory redirects point outside the tree. These middlewares put the
//! prefix back and send the bare prefix to its trailing-slash form.

use axum::{
    extract::{OriginalUri, Request},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Mount point of the static file tree.
pub const APP_PREFIX: &str = "/app";

/// `GET /app` -> `301 /app/`, answered before the request reaches the files.
pub async fn redirect_bare_prefix(req: Request, next: Next) -> Response {
    let original = req.extensions().get::<OriginalUri>().map(|u| u.0.clone());
    match original {
        Some(uri) if uri.path() == APP_PREFIX => {
            let location = match uri.query() {
                Some(q) => format!("{APP_PREFIX}/?{q}"),
                None => format!("{APP_PREFIX}/"),
            };
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        _ => next.run(req).await,
    }
}

/// Re-prefix absolute `Location` headers produced inside the file tree.
pub async fn keep_prefix_on_redirect(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;
    if !res.status().is_redirection() {
        return res;
    }

    let prefixed = res
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|loc| loc.starts_with('/'))
        .map(|loc| format!("{APP_PREFIX}{loc}"));

    if let Some(loc) = prefixed {
        match HeaderValue::from_str(&loc) {
            Ok(v) => {
                res.headers_mut().insert(header::LOCATION, v);
            }
            Err(e) => tracing::warn!(error = %e, "cannot rewrite redirect location"),
        }
    }
    res
}
