use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use catalog_infra::StorageConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let services = Arc::new(catalog_api::app::services::in_memory_services());
        Self::spawn_with(catalog_api::app::build_app(services)).await
    }

    async fn spawn_with(app: axum::Router) -> Self {
        // Same router as prod, bound to an ephemeral port.
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(client: &reqwest::Client, srv: &TestServer, name: &str) -> Value {
    let res = client
        .post(srv.url("/products"))
        .json(&json!({
            "name": name,
            "description": "A useful thing",
            "url": "https://example.com/thing",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn list_len(client: &reqwest::Client, srv: &TestServer) -> usize {
    let res = client.get(srv.url("/products")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    body["items"].as_array().unwrap().len()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, "Widget").await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["ratings"], json!([]));
    assert!(created["updated_at"].is_null());
    assert!(created["created_at"].is_string());

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_missing_field_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&json!({ "name": "Widget", "description": "" , "url": "https://x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("description"));

    let res = client
        .post(srv.url("/products"))
        .json(&json!({ "name": "Widget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(list_len(&client, &srv).await, 0);
}

#[tokio::test]
async fn unknown_id_is_not_found_everywhere() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let path = "/products/does-not-exist";

    let responses = vec![
        client.get(srv.url(path)).send().await.unwrap(),
        client
            .put(srv.url(path))
            .json(&json!({ "name": "x" }))
            .send()
            .await
            .unwrap(),
        client.delete(srv.url(path)).send().await.unwrap(),
        client
            .post(srv.url(&format!("{path}/ratings")))
            .json(&json!({ "rating": 3 }))
            .send()
            .await
            .unwrap(),
        client
            .get(srv.url(&format!("{path}/rating")))
            .send()
            .await
            .unwrap(),
    ];

    for res in responses {
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains("does-not-exist"));
    }
}

#[tokio::test]
async fn rating_lifecycle_and_average() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, "Widget").await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .get(srv.url(&format!("/products/{id}/rating")))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["average"].as_f64().unwrap(), 0.0);

    for rating in [1, 2, 2] {
        let res = client
            .post(srv.url(&format!("/products/{id}/ratings")))
            .json(&json!({ "rating": rating }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .post(srv.url(&format!("/products/{id}/ratings")))
        .json(&json!({ "rating": 6 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "rating_out_of_range");

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["ratings"], json!([1, 2, 2]));

    let res = client
        .get(srv.url(&format!("/products/{id}/rating")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["average"].as_f64().unwrap(), 1.67);
}

#[tokio::test]
async fn update_then_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, "Widget").await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .put(srv.url(&format!("/products/{id}")))
        .json(&json!({ "name": "Gadget", "url": "https://example.com/gadget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Gadget");
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["url"], "https://example.com/gadget");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(updated["updated_at"].is_string());

    let res = client
        .delete(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let removed: Value = res.json().await.unwrap();
    assert_eq!(removed, updated);

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_counts_adds_minus_deletes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d"] {
        let created = create_product(&client, &srv, name).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    for id in &ids[..2] {
        let res = client
            .delete(srv.url(&format!("/products/{id}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(list_len(&client, &srv).await, 2);
}

#[tokio::test]
async fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageConfig::File(dir.path().join("products.json"));
    let client = reqwest::Client::new();

    let id = {
        let services = Arc::new(catalog_api::app::services::build_services(&storage).unwrap());
        let srv = TestServer::spawn_with(catalog_api::app::build_app(services)).await;
        let created = create_product(&client, &srv, "Durable").await;
        created["id"].as_str().unwrap().to_string()
    };

    let services = Arc::new(catalog_api::app::services::build_services(&storage).unwrap());
    let srv = TestServer::spawn_with(catalog_api::app::build_app(services)).await;
    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["name"], "Durable");
}

#[tokio::test]
async fn null_field_on_create_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/products"))
        .json(&json!({ "name": null, "description": "d", "url": "u" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("name"));

    assert_eq!(list_len(&client, &srv).await, 0);
}

#[tokio::test]
async fn malformed_bodies_use_the_error_envelope() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, "Widget").await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .post(srv.url(&format!("/products/{id}/ratings")))
        .json(&json!({ "rating": 1e20 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");
    assert!(body["message"].is_string());

    let res = client
        .put(srv.url(&format!("/products/{id}")))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    let product: Value = res.json().await.unwrap();
    assert_eq!(product, created);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_ratings_against_file_store_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageConfig::File(dir.path().join("products.json"));
    let services = Arc::new(catalog_api::app::services::build_services(&storage).unwrap());
    let srv = TestServer::spawn_with(catalog_api::app::build_app(services)).await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv, "Busy").await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut tasks = Vec::new();
    for i in 0..20i64 {
        let client = client.clone();
        let url = srv.url(&format!("/products/{id}/ratings"));
        tasks.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "rating": (i % 5) + 1 }))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let res = client
        .get(srv.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap();
    let product: Value = res.json().await.unwrap();
    assert_eq!(product["ratings"].as_array().unwrap().len(), 20);
}
