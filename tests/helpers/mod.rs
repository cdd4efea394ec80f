#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// In-process stand-in for a vendor endpoint. Shuts down when dropped.
pub struct MockVendor {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockVendor {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for MockVendor {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
    }
}

pub async fn start_mock_vendor(
    path: &'static str,
    response_status: u16,
    response_body: &'static str,
) -> MockVendor {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let sink = Arc::clone(&captured);
    let app = Router::new().route(
        path,
        post(
            move |headers: HeaderMap, Query(query): Query<HashMap<String, String>>, body: Bytes| {
                let sink = Arc::clone(&sink);
                async move {
                    sink.lock().unwrap().push(CapturedRequest {
                        headers,
                        query,
                        body: body.to_vec(),
                    });
                    let status = StatusCode::from_u16(response_status).unwrap();
                    (
                        status,
                        [(header::CONTENT_TYPE, "application/json")],
                        response_body,
                    )
                        .into_response()
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    MockVendor {
        base_url: format!("http://{}", addr),
        captured,
        shutdown_tx: Some(shutdown_tx),
    }
}

pub const DEEPGRAM_SPANISH_RESPONSE: &str = r#"{
  "metadata": { "request_id": "req-1", "duration": 3.2 },
  "results": {
    "channels": [{
      "detected_language": "es",
      "alternatives": [{ "transcript": "hola a todos", "confidence": 0.97 }]
    }]
  }
}"#;

pub const DEEPGRAM_ENGLISH_RESPONSE: &str = r#"{
  "metadata": { "request_id": "req-2", "duration": 2.0 },
  "results": {
    "channels": [{
      "detected_language": "en",
      "alternatives": [{ "transcript": "hello everyone", "confidence": 0.99 }]
    }]
  }
}"#;
