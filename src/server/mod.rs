// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface: query normalization and resource routes.

pub mod query;
pub mod routes;

pub use query::ListQuery;
pub use routes::app;
