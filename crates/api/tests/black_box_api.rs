use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use smartstock_api::app::{build_app, services::AppServices};
use smartstock_auth::{InMemorySessionProvider, SessionUser};
use smartstock_core::UserId;
use smartstock_infra::{DashboardConfig, InMemoryRecordStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(session: InMemorySessionProvider) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let store = InMemoryRecordStore::from_seed(json!({
            "items": [{"id": "sku-1", "quantity": 3, "unitCost": "2.50", "reorderPoint": 5}]
        }))
        .unwrap();
        let services = AppServices::new(Arc::new(store), Arc::new(session), DashboardConfig::default());
        let app = build_app(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn session_required_for_dashboard() {
    let srv = TestServer::spawn(InMemorySessionProvider::new()).await;

    let res = reqwest::get(format!("{}/dashboard", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["redirect"], "/login.html");
}

#[tokio::test]
async fn dashboard_then_sign_out() {
    let user = SessionUser::new(UserId::parse("uid-9").unwrap()).with_email("ops@example.com");
    let srv = TestServer::spawn(InMemorySessionProvider::signed_in(user)).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/dashboard/kpis", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["tiles"]["stock_on_hand"], "3");
    assert_eq!(body["tiles"]["inventory_value"], "$8");
    assert_eq!(body["tiles"]["low_stock"], "1");

    let res = client
        .post(format!("{}/session/sign-out", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/dashboard/kpis", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
