// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and list-call plumbing.

pub mod client;
pub mod list;

pub use client::create_client;
pub use list::{list_resource, ListEnvelope};
