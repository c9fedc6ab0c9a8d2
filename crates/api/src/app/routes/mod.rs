use axum::{
    routing::{get, post},
    Router,
};

pub mod dashboard;
pub mod forms;
pub mod session;
pub mod system;

/// Endpoints that need a signed-in user.
pub fn protected() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard::full))
        .route("/dashboard/kpis", get(dashboard::kpis))
        .route("/dashboard/alerts", get(dashboard::alerts))
        .route("/dashboard/transactions", get(dashboard::transactions))
        .route("/session", get(session::current))
        .route("/session/sign-out", post(session::sign_out))
        .route("/session/profile", post(session::ensure_profile))
}

/// Endpoints reachable before sign-in.
pub fn public() -> Router {
    Router::new().nest("/forms", forms::router())
}
