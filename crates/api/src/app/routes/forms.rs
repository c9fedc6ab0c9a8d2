use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;

use smartstock_auth::{
    auth_error_message, validate_reset_email, FieldError, FormErrors, FormField, SignInForm,
    SignUpForm, DASHBOARD_PATH,
};
use smartstock_core::DomainError;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
        .route("/password-reset", post(password_reset))
        .route("/auth-error", post(auth_error))
}

pub async fn sign_in(Json(form): Json<SignInForm>) -> axum::response::Response {
    if let Err(e) = form.validate() {
        return errors::form_errors_to_response(e);
    }

    Json(dto::FormAccepted {
        redirect: DASHBOARD_PATH,
        display_name: None,
    })
    .into_response()
}

pub async fn sign_up(Json(form): Json<SignUpForm>) -> axum::response::Response {
    if let Err(e) = form.validate() {
        return errors::form_errors_to_response(e);
    }

    Json(dto::FormAccepted {
        redirect: DASHBOARD_PATH,
        display_name: form.display_name().map(str::to_string),
    })
    .into_response()
}

pub async fn password_reset(Json(body): Json<dto::PasswordResetRequest>) -> axum::response::Response {
    match validate_reset_email(body.email.trim()) {
        Ok(()) => (StatusCode::ACCEPTED, Json(json!({ "email": body.email.trim() }))).into_response(),
        Err(DomainError::Validation(message)) => {
            errors::form_errors_to_response(FormErrors(vec![FieldError {
                field: FormField::Email,
                message,
            }]))
        }
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_request", e.to_string()),
    }
}

pub async fn auth_error(Json(body): Json<dto::AuthErrorRequest>) -> impl IntoResponse {
    Json(json!({
        "code": body.code,
        "message": auth_error_message(body.flow, &body.code),
    }))
}
