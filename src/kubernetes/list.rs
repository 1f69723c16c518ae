// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic list call and response shaping.
//!
//! Every list route goes through [`list_resource`]: one outbound call per
//! request, no retries, no pagination auto-follow. The raw list body is
//! shaped into a [`ListEnvelope`] with the items passed through unmodified.

use crate::error::Result;
use crate::server::query::ListQuery;
use kube::core::Request;
use kube::{Client, Resource};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Uniform success envelope for all list routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEnvelope {
    /// Always equals `items.len()`
    pub count: usize,
    /// Continuation token from upstream list metadata, null when absent
    #[serde(rename = "continue")]
    pub continue_token: Option<String>,
    /// Resource version from upstream list metadata, null when absent
    #[serde(rename = "resourceVersion")]
    pub resource_version: Option<String>,
    /// Raw resource objects, relayed without filtering or projection
    pub items: Vec<Value>,
}

/// List resources of kind `K`, namespaced when `namespace` is set.
///
/// `K` is only a path marker; the response body is kept as raw JSON so the
/// facade relays items verbatim instead of round-tripping them through typed
/// structs.
pub async fn list_resource<K>(
    client: &Client,
    namespace: Option<&str>,
    query: &ListQuery,
) -> Result<ListEnvelope>
where
    K: Resource,
    K::DynamicType: Default,
{
    let url_path = K::url_path(&K::DynamicType::default(), namespace);
    debug!("Listing {}", url_path);

    let request = Request::new(url_path)
        .list(&query.to_list_params())
        .map_err(kube::Error::BuildRequest)?;

    let body: Value = client.request(request).await?;
    Ok(shape(body))
}

/// Shape a raw list response into the uniform envelope.
///
/// Missing or null `items` become an empty sequence; `continue` and
/// `resourceVersion` are taken verbatim from the list metadata when present.
pub fn shape(mut body: Value) -> ListEnvelope {
    let continue_token = body
        .pointer("/metadata/continue")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(String::from);

    let resource_version = body
        .pointer("/metadata/resourceVersion")
        .and_then(Value::as_str)
        .map(String::from);

    let items = match body.get_mut("items").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    ListEnvelope {
        count: items.len(),
        continue_token,
        resource_version,
        items,
    }
}
