use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use smartstock_auth::{SessionProvider, LOGIN_PATH};

use crate::context::SessionContext;

#[derive(Clone)]
pub struct SessionState {
    pub provider: Arc<dyn SessionProvider>,
}

/// Reject requests without a signed-in user; otherwise attach [`SessionContext`].
pub async fn session_guard(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(user) = state.provider.current_user().await else {
        tracing::debug!(path = %req.uri().path(), "no session; redirecting to login");
        return unauthenticated();
    };

    req.extensions_mut().insert(SessionContext::new(user));
    next.run(req).await
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({
            "error": "unauthenticated",
            "redirect": LOGIN_PATH,
        })),
    )
        .into_response()
}
