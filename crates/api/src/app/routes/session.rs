use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use smartstock_auth::LOGIN_PATH;
use smartstock_infra::{ensure_user_profile, ProfileOutcome};

use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

pub async fn current(Extension(session): Extension<SessionContext>) -> impl IntoResponse {
    Json(dto::SessionResponse::from(session.user()))
}

pub async fn sign_out(
    Extension(services): Extension<AppServices>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    if let Err(e) = services.session.sign_out().await {
        tracing::warn!(uid = %session.uid(), error = %e, "sign-out failed");
        return errors::json_error(StatusCode::BAD_GATEWAY, "sign_out_failed", e.to_string());
    }

    Json(json!({ "redirect": LOGIN_PATH })).into_response()
}

/// Create `users/{uid}` on first sign-in; a second call is a no-op.
pub async fn ensure_profile(
    Extension(services): Extension<AppServices>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::ProfileRequest>,
) -> axum::response::Response {
    let outcome = match ensure_user_profile(
        services.documents.as_ref(),
        services.users_collection(),
        session.user(),
        body.display_name.as_deref(),
        Utc::now(),
    )
    .await
    {
        Ok(o) => o,
        Err(e) => return errors::fetch_error_to_response(e),
    };

    let status = match outcome {
        ProfileOutcome::Created => StatusCode::CREATED,
        ProfileOutcome::Existing => StatusCode::OK,
    };
    (status, Json(dto::ProfileResponse::from(outcome))).into_response()
}
