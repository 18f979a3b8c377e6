//! End-to-end tests serving the router on an ephemeral port.

use std::net::SocketAddr;

use fluxo_caixa::api::{create_router, AppState};
use fluxo_caixa::server;
use reqwest::StatusCode;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<fluxo_caixa::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = server::bind(([127, 0, 0, 1], 0).into()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(
            listener,
            create_router(AppState::new()),
            async move {
                let _ = stopped.await;
            },
        ));

        Self { addr, stop, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn health_returns_ok_over_tcp() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);

    server.shutdown().await;
}

#[tokio::test]
async fn hundred_concurrent_health_checks() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let url = server.url("/health");

    let requests = (0..100).map(|_| {
        let client = client.clone();
        let url = url.clone();
        async move {
            let response = client.get(url).send().await.unwrap();
            (response.status(), response.text().await.unwrap())
        }
    });
    let results = futures::future::join_all(requests).await;

    assert_eq!(results.len(), 100);
    for (status, body) in results {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    server.shutdown().await;
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/nonexistent")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.shutdown().await;
}

#[tokio::test]
async fn metadata_is_stable_across_requests() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut seen = Vec::new();
    for _ in 0..3 {
        let doc: serde_json::Value = client
            .get(server.url("/openapi.json"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        seen.push((doc["info"]["title"].clone(), doc["info"]["version"].clone()));
    }

    for (title, version) in seen {
        assert_eq!(title, "Fluxo de Caixa API");
        assert_eq!(version, "1.0.0");
    }

    server.shutdown().await;
}
