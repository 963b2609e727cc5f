mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use common::*;
use facematch::config::ConfDir;
use facematch::matcher::DEFAULT_THRESHOLD;
use facematch::{FaceDBBuilder, FaceService, server};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use rstest::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _dir: TempDir,
}

impl TestServer {
    async fn post(&self, path: &str, form: Form) -> reqwest::Response {
        self.client.post(format!("http://{}{}", self.addr, path)).multipart(form).send().await.unwrap()
    }

    async fn register(&self, name: &str, image: &'static [u8]) -> reqwest::Response {
        let form = Form::new().text("name", name.to_string()).part("file", Part::bytes(image));
        self.post("/register", form).await
    }

    async fn verify(&self, image: &'static [u8], threshold: Option<f32>) -> reqwest::Response {
        let mut form = Form::new().part("file", Part::bytes(image));
        if let Some(threshold) = threshold {
            form = form.text("threshold", threshold.to_string());
        }
        self.post("/verify", form).await
    }
}

#[fixture]
async fn test_server() -> TestServer {
    let dir = TempDir::new().unwrap();
    let db = FaceDBBuilder::new(ConfDir::new(dir.path())).open().await.unwrap();
    let encoder = FakeEncoder::default()
        .with(b"alice.jpg", basis(0))
        .with(b"bob.jpg", basis(1))
        .with(b"stranger.jpg", negate(&basis(0)));
    let service = FaceService::new(db, Arc::new(encoder), DEFAULT_THRESHOLD);
    let app = server::create_app(server::AppState::new(service));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    TestServer { addr, client: reqwest::Client::new(), _dir: dir }
}

#[rstest]
#[tokio::test]
async fn register_and_verify(#[future] test_server: TestServer) {
    let s = test_server.await;

    let resp = s.register("alice", b"alice.jpg").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.json::<Value>().await.unwrap();
    assert_eq!(body["status"], "ok");
    let alice = body["id"].as_i64().unwrap();

    let resp = s.register("bob", b"bob.jpg").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = s.verify(b"alice.jpg", None).await.json::<Value>().await.unwrap();
    assert_eq!(body["match"]["id"], json!(alice));
    assert_eq!(body["match"]["name"], "alice");
    assert!(body["match"]["score"].as_f64().unwrap() > 0.99);
}

#[rstest]
#[tokio::test]
async fn verify_without_match_returns_null(#[future] test_server: TestServer) {
    let s = test_server.await;
    s.register("alice", b"alice.jpg").await;

    let resp = s.verify(b"stranger.jpg", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({ "match": null }));

    let body = s.verify(b"stranger.jpg", Some(-1.0)).await.json::<Value>().await.unwrap();
    assert_eq!(body["match"]["name"], "alice");
}

#[rstest]
#[tokio::test]
async fn no_face_is_unprocessable(#[future] test_server: TestServer) {
    let s = test_server.await;
    assert_eq!(s.register("nobody", b"cat.jpg").await.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(s.verify(b"cat.jpg", None).await.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[tokio::test]
async fn register_requires_name(#[future] test_server: TestServer) {
    let s = test_server.await;
    let form = Form::new().part("file", Part::bytes(&b"alice.jpg"[..]));
    assert!(s.post("/register", form).await.status().is_client_error());
}

#[rstest]
#[tokio::test]
async fn non_finite_threshold_is_bad_request(#[future] test_server: TestServer) {
    let s = test_server.await;
    s.register("alice", b"alice.jpg").await;

    assert_eq!(s.verify(b"alice.jpg", Some(f32::NAN)).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(s.verify(b"alice.jpg", Some(f32::INFINITY)).await.status(), StatusCode::BAD_REQUEST);
}
