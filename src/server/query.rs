// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Query-string normalization for list routes.

use crate::error::{PortholeError, Result};
use kube::api::ListParams;
use std::borrow::Cow;
use url::form_urlencoded;

/// Normalized list-call parameters parsed from a request query string.
///
/// Absent values mean "use the server default". An absent or empty
/// `namespace` selects the cluster-wide list variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub namespace: Option<String>,
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
    pub limit: Option<u32>,
    pub continue_token: Option<String>,
    pub resource_version: Option<String>,
}

impl ListQuery {
    /// Parse a raw query string. Pure function, no side effects.
    ///
    /// Selectors, `continue` and `resourceVersion` pass through as opaque
    /// strings. `limit` must be a non-negative integer; anything else is
    /// rejected rather than silently forwarded. Duplicate keys keep the last
    /// occurrence, unknown keys are ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut query = ListQuery::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "namespace" => query.namespace = non_empty(value),
                "labelSelector" => query.label_selector = non_empty(value),
                "fieldSelector" => query.field_selector = non_empty(value),
                "limit" => query.limit = parse_limit(&value)?,
                "continue" => query.continue_token = non_empty(value),
                "resourceVersion" => query.resource_version = non_empty(value),
                _ => {}
            }
        }

        Ok(query)
    }

    /// Map the normalized query onto the client library's list parameters.
    pub fn to_list_params(&self) -> ListParams {
        let mut params = ListParams::default();

        if let Some(labels) = &self.label_selector {
            params = params.labels(labels);
        }
        if let Some(fields) = &self.field_selector {
            params = params.fields(fields);
        }
        if let Some(limit) = self.limit {
            params = params.limit(limit);
        }
        if let Some(token) = &self.continue_token {
            params = params.continue_token(token);
        }
        params.resource_version = self.resource_version.clone();

        params
    }
}

fn non_empty(value: Cow<'_, str>) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}

fn parse_limit(value: &str) -> Result<Option<u32>> {
    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<u32>().map(Some).map_err(|_| {
        PortholeError::InvalidQuery(format!(
            "limit must be a non-negative integer, got '{}'",
            value
        ))
    })
}
