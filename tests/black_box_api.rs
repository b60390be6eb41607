use std::path::{Path, PathBuf};

use catalog_service::{build_router, catalog, error::CatalogError, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same startup order as the binary: load the catalog, then bind.
    async fn spawn(products: &Path, brands: &Path) -> Result<Self, CatalogError> {
        let catalog = catalog::load(products, brands).await?;
        let app = build_router(AppState::new(catalog));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { base_url, handle })
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("{}{}", self.base_url, path))
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn bundled(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("initial-data")
        .join(name)
}

async fn widget_server() -> TestServer {
    TestServer::spawn(&fixture("products.json"), &fixture("empty.json"))
        .await
        .unwrap()
}

fn is_json(res: &reqwest::Response) -> bool {
    res.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .is_some_and(|v| v == "application/json")
}

#[tokio::test]
async fn lists_all_products() {
    let server = widget_server().await;

    let res = server.get("/v1/products").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(is_json(&res));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "id": "1", "brand": "acme", "name": "Widget" }]));
}

#[tokio::test]
async fn gets_one_product_by_id() {
    let server = widget_server().await;

    let res = server.get("/v1/products/1").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "id": "1", "brand": "acme", "name": "Widget" }));
}

#[tokio::test]
async fn unknown_product_id_is_400() {
    let server = widget_server().await;

    let res = server.get("/v1/products/999").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "Product Not Found");
}

#[tokio::test]
async fn lists_all_brands() {
    let server = TestServer::spawn(&fixture("products.json"), &fixture("brands.json"))
        .await
        .unwrap();

    let res = server.get("/v1/brands").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(is_json(&res));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "id": "acme", "name": "Acme" }]));
}

#[tokio::test]
async fn filters_products_by_brand() {
    let server = widget_server().await;

    let body: Value = server.get("/v1/brands/acme").await.json().await.unwrap();
    assert_eq!(body, json!([{ "id": "1", "brand": "acme", "name": "Widget" }]));

    let res = server.get("/v1/brands/nope").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn first_request_sees_the_fully_loaded_catalog() {
    let server = TestServer::spawn(&bundled("products.json"), &bundled("brands.json"))
        .await
        .unwrap();

    // No warm-up: the very first responses must already reflect both files.
    let (products, brands) = tokio::join!(server.get("/v1/products"), server.get("/v1/brands"));
    let products: Vec<Value> = products.json().await.unwrap();
    let brands: Vec<Value> = brands.json().await.unwrap();

    assert_eq!(products.len(), 9);
    assert_eq!(brands.len(), 5);
}

#[tokio::test]
async fn bundled_data_brand_filter_keeps_source_order() {
    let server = TestServer::spawn(&bundled("products.json"), &bundled("brands.json"))
        .await
        .unwrap();

    let body: Vec<Value> = server.get("/v1/brands/oakley").await.json().await.unwrap();
    let ids: Vec<&str> = body.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn record_key_order_is_preserved_on_the_wire() {
    let server = TestServer::spawn(&bundled("products.json"), &bundled("brands.json"))
        .await
        .unwrap();

    let raw = server.get("/v1/products/4").await.text().await.unwrap();
    assert!(raw.starts_with(r#"{"id":"4","brand":"ray-ban","name":"Better glasses""#), "{raw}");
}

#[tokio::test]
async fn server_does_not_start_when_a_data_file_is_missing() {
    let result = TestServer::spawn(&fixture("products.json"), &fixture("missing.json")).await;
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}

#[tokio::test]
async fn server_does_not_start_when_a_data_file_is_malformed() {
    let result = TestServer::spawn(&fixture("malformed.json"), &fixture("brands.json")).await;
    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}
