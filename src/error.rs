// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum PortholeError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to resolve kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = std::result::Result<T, PortholeError>;

impl PortholeError {
    /// Map this error to the HTTP status and `details` object of the error
    /// envelope. Upstream API errors keep their embedded status and body;
    /// rejected query parameters are 400; everything else collapses to 500
    /// with a local message.
    pub fn status_and_details(&self) -> (StatusCode, Value) {
        match self {
            PortholeError::KubeError(kube::Error::Api(resp)) => {
                let status =
                    StatusCode::from_u16(resp.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let details = serde_json::to_value(resp)
                    .unwrap_or_else(|_| json!({ "message": resp.message }));
                (status, details)
            }
            PortholeError::InvalidQuery(_) => {
                (StatusCode::BAD_REQUEST, json!({ "message": self.to_string() }))
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": other.to_string() }),
            ),
        }
    }
}

impl IntoResponse for PortholeError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);

        let (status, details) = self.status_and_details();
        let body = json!({
            "error": "K8S_API_ERROR",
            "status": status.as_u16(),
            "details": details,
        });

        (status, Json(body)).into_response()
    }
}
