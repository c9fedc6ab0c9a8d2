//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store and session wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    let session_state = middleware::SessionState {
        provider: services.session.clone(),
    };

    // Guarded routes: require a signed-in user.
    let protected = routes::protected()
        .layer(Extension(services))
        .route_layer(axum::middleware::from_fn_with_state(
            session_state,
            middleware::session_guard,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public())
        .merge(protected)
        .layer(ServiceBuilder::new())
}
