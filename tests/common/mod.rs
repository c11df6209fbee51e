#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use paystack_kit::{ApiClient, ClientConfig};
use serde_json::Value;

pub const SECRET: &str = "sk_test_mock";

/// A request as received by the mock API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<(Method, String), Value>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stand-in for the remote API.
///
/// Replies 401 unless the request carries `Bearer SECRET`, 404 for unregistered routes, and the
/// registered JSON body otherwise.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockApiBuilder {
    routes: HashMap<(Method, String), Value>,
}

impl MockApiBuilder {
    pub fn route(mut self, method: Method, path: &str, body: Value) -> Self {
        self.routes.insert((method, path.to_string()), body);
        self
    }

    pub async fn start(self) -> MockApi {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(self.routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockApi {
            base_url: format!("http://{addr}"),
            requests,
        }
    }
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder {
            routes: HashMap::new(),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client_with_secret(SECRET)
    }

    pub fn client_with_secret(&self, secret: &str) -> ApiClient {
        ApiClient::from_config(
            ClientConfig::builder()
                .secret(secret)
                .base_url(self.base_url.clone())
                .build(),
        )
        .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request received")
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers: headers.clone(),
        body,
    });

    let expected = format!("Bearer {SECRET}");
    if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match state.routes.get(&(method, path)) {
        Some(body) => Json(body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
