// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes: one list endpoint per resource kind.
//!
//! All list routes go through the same pair of generic handlers, so the
//! namespaced/cluster-wide branching exists exactly once. Handlers are
//! stateless request/response glue around [`list_resource`].

use crate::error::Result;
use crate::kubernetes::list::{list_resource, ListEnvelope};
use crate::server::query::ListQuery;
use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use http::{Request, Response};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::core::v1::{Event, Namespace, Node, Pod, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::{Client, Resource};
use serde_json::json;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};

/// Shared state injected into every handler. The client is a cheap handle
/// clone and is only ever used for read-only list calls.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
}

/// Build the application router.
pub fn app(client: Client) -> Router {
    let state = AppState { client };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/namespaces", get(list_cluster::<Namespace>))
        .route("/api/pods", get(list_namespaced::<Pod>))
        .route("/api/services", get(list_namespaced::<Service>))
        .route("/api/nodes", get(list_cluster::<Node>))
        .route("/api/deployments", get(list_namespaced::<Deployment>))
        .route("/api/daemonsets", get(list_namespaced::<DaemonSet>))
        .route("/api/statefulsets", get(list_namespaced::<StatefulSet>))
        .route("/api/ingresses", get(list_namespaced::<Ingress>))
        .route("/api/events", get(list_namespaced::<Event>))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis() as u64,
                        "handled request"
                    );
                }),
        )
        .with_state(state)
}

/// Liveness probe, independent of control-plane reachability.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// List a namespaced resource kind: namespaced variant when `namespace` is
/// present and non-empty, all-namespaces variant otherwise.
async fn list_namespaced<K>(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListEnvelope>>
where
    K: Resource<Scope = NamespaceResourceScope> + Send + Sync + 'static,
    K::DynamicType: Default,
{
    let query = ListQuery::parse(raw.as_deref().unwrap_or_default())?;
    let envelope = list_resource::<K>(&state.client, query.namespace.as_deref(), &query).await?;
    Ok(Json(envelope))
}

/// List a cluster-scoped resource kind. The `namespace` parameter has no
/// meaning for these kinds and is ignored.
async fn list_cluster<K>(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListEnvelope>>
where
    K: Resource<Scope = ClusterResourceScope> + Send + Sync + 'static,
    K::DynamicType: Default,
{
    let query = ListQuery::parse(raw.as_deref().unwrap_or_default())?;
    let envelope = list_resource::<K>(&state.client, None, &query).await?;
    Ok(Json(envelope))
}
