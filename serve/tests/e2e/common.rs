//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.

use std::sync::Arc;
use std::time::Duration;

use promptsmith::{GenerationClient, MockLlm, PromptForge};
use serve::{run_serve_on_listener, AppState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestServer {
    pub base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Signals graceful shutdown and waits for the server task.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Bind to a random port and spawn the server with `state`.
pub async fn spawn_server(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(run_serve_on_listener(listener, Arc::new(state), async move {
        let _ = shutdown_rx.await;
    }));
    TestServer {
        base_url: format!("http://{}", addr),
        shutdown_tx: Some(shutdown_tx),
        handle,
    }
}

/// Server whose generator is `mock`.
pub async fn spawn_with_mock(mock: Arc<MockLlm>) -> TestServer {
    let forge = PromptForge::new(Some(GenerationClient::new(mock)), "gpt-4o");
    spawn_server(AppState::new(forge, None)).await
}

/// Server started without a usable credential.
pub async fn spawn_without_credential() -> TestServer {
    let forge = PromptForge::new(None, "gpt-4o");
    spawn_server(AppState::new(
        forge,
        Some("Chave da API OpenAI não encontrada.".to_string()),
    ))
    .await
}

/// POSTs `{"text": text}` to `/api/generate`; returns status and raw body.
pub async fn post_generate(server: &TestServer, text: &str) -> (reqwest::StatusCode, String) {
    let resp = reqwest::Client::new()
        .post(server.url("/api/generate"))
        .json(&serve::GenerateRequest {
            text: text.to_string(),
        })
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, body);
    (status, body)
}
