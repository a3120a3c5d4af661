//! End-to-end wiring: environment → configuration → data source → transport

use std::sync::Mutex;

use atrium_app::AppContext;
use atrium_core::DataSourceKind;
use once_cell::sync::Lazy;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const VARS: [&str; 6] = [
    "ATRIUM_API_BASE_URL",
    "ATRIUM_API_TIMEOUT_MS",
    "ATRIUM_WITH_CREDENTIALS",
    "ATRIUM_USE_MOCK",
    "ATRIUM_MOCK_DELAY_MS",
    "ATRIUM_TOKEN_PATH",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[tokio::test]
async fn live_context_lists_users_from_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "content": [],
                "totalElements": 0,
                "totalPages": 0,
                "size": 10,
                "number": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let context = {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("ATRIUM_API_BASE_URL", format!("{}/api", server.uri()));
        std::env::set_var("ATRIUM_USE_MOCK", "false");
        let context = AppContext::from_env();
        clear_env();
        context.expect("context builds from env")
    };

    assert_eq!(context.data_source_kind(), DataSourceKind::Network);
    let page = context.data_source.list_users(0, 10).await.unwrap();
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn mock_flag_from_env_selects_fixtures() {
    let context = {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("ATRIUM_API_BASE_URL", "http://localhost:8080/api");
        std::env::set_var("ATRIUM_USE_MOCK", "true");
        std::env::set_var("ATRIUM_MOCK_DELAY_MS", "0");
        let context = AppContext::from_env();
        clear_env();
        context.expect("context builds from env")
    };

    assert_eq!(context.data_source_kind(), DataSourceKind::Fixture);
    let page = context.data_source.list_users(0, 10).await.unwrap();
    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total_pages, 1);
}
