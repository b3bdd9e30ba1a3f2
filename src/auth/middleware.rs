//! Bearer-token authentication middleware.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use crate::auth::UserDirectory;

/// Attach the `Principal` for a known bearer token to the request.
pub async fn authenticate(
    State(directory): State<Arc<UserDirectory>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = token {
        match directory.authenticate(&token) {
            Some(principal) => {
                tracing::debug!(user_id = principal.id, "Request authenticated");
                request.extensions_mut().insert(principal);
            }
            None => tracing::warn!("Unknown bearer token, treating request as anonymous"),
        }
    }

    next.run(request).await
}
