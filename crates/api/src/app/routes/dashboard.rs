use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use crate::app::{dto::AsOfQuery, errors, services::AppServices};

/// All three regions; a failed region is reported as `loading`, never as an error.
pub async fn full(
    Extension(services): Extension<AppServices>,
    Query(query): Query<AsOfQuery>,
) -> axum::response::Response {
    let as_of = match query.parse() {
        Ok(v) => v.unwrap_or_else(|| services.dashboard.now()),
        Err(resp) => return resp,
    };

    Json(services.dashboard.load_dashboard(as_of).await).into_response()
}

pub async fn kpis(
    Extension(services): Extension<AppServices>,
    Query(query): Query<AsOfQuery>,
) -> axum::response::Response {
    let as_of = match query.parse() {
        Ok(v) => v.unwrap_or_else(|| services.dashboard.now()),
        Err(resp) => return resp,
    };

    match services.dashboard.load_kpis(&as_of).await {
        Ok(panel) => Json(panel).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn alerts(Extension(services): Extension<AppServices>) -> axum::response::Response {
    match services.dashboard.load_alerts().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}

pub async fn transactions(Extension(services): Extension<AppServices>) -> axum::response::Response {
    match services.dashboard.load_transactions().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::fetch_error_to_response(e),
    }
}
