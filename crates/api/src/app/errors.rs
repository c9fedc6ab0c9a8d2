use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use smartstock_auth::FormErrors;
use smartstock_infra::FetchError;

pub fn fetch_error_to_response(err: FetchError) -> axum::response::Response {
    tracing::warn!(error = %err, "record store fetch failed");
    let code = match err {
        FetchError::Unavailable(_) => "store_unavailable",
        FetchError::PermissionDenied(_) => "permission_denied",
        FetchError::Decode(_) => "decode_error",
        FetchError::Storage(_) => "store_error",
    };
    json_error(StatusCode::BAD_GATEWAY, code, err.to_string())
}

pub fn form_errors_to_response(errors: FormErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": errors.to_string(),
            "fields": errors.0,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
