// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API list responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock API server that returns predefined list responses by request path
/// and records every request it receives.
#[derive(Clone, Default)]
pub struct MockApiServer {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_list(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Fail every request at the transport level, simulating an unreachable
    /// API server (no embedded HTTP response).
    pub fn with_connection_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Build a kube Client backed by this mock
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Paths (including query strings) of all requests received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn find_response(&self, path: &str) -> Option<(u16, String)> {
        self.responses.lock().unwrap().get(path).cloned()
    }
}

impl Service<Request<Body>> for MockApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());
        self.requests.lock().unwrap().push(path_and_query);

        let failure = self.failure.lock().unwrap().clone();
        let response = self.find_response(req.uri().path());

        Box::pin(async move {
            if let Some(message) = failure {
                return Err(message.into());
            }

            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = status_json(404, "NotFound", "the requested resource was not found");
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.into_bytes()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a list response body with empty metadata
pub fn list_json(kind: &str, items: &[serde_json::Value]) -> String {
    list_json_with_meta(kind, items, None, None)
}

/// Create a list response body with continue/resourceVersion metadata
pub fn list_json_with_meta(
    kind: &str,
    items: &[serde_json::Value],
    continue_token: Option<&str>,
    resource_version: Option<&str>,
) -> String {
    let mut metadata = serde_json::Map::new();
    if let Some(rv) = resource_version {
        metadata.insert("resourceVersion".to_string(), serde_json::json!(rv));
    }
    if let Some(token) = continue_token {
        metadata.insert("continue".to_string(), serde_json::json!(token));
    }

    serde_json::json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": metadata,
        "items": items,
    })
    .to_string()
}

/// Create a minimal pod object
pub fn pod_json(namespace: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("uid-{}", name),
        },
        "spec": { "containers": [] },
        "status": { "phase": "Running" },
    })
}

/// Create a minimal node object
pub fn node_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": { "name": name, "uid": format!("uid-{}", name) },
        "status": { "conditions": [] },
    })
}

/// Create a Kubernetes Status error body
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code,
    })
    .to_string()
}
