// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client configuration resolution.
//!
//! The configuration is resolved exactly once at startup, short-circuiting on
//! the first strategy that applies:
//! 1. in-cluster service account (env marker plus mounted credentials),
//! 2. kubeconfig files (`KUBECONFIG` override, then `$HOME/.kube/config`),
//! 3. the client library's default inference as a catch-all.
//!
//! Connectivity is not verified here; a configuration that points at an
//! unreachable cluster surfaces as per-request errors.

use crate::constants::{service_account, IN_CLUSTER_ENV, KUBECONFIG_ENV};
use crate::error::{PortholeError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Create a Kubernetes client using the startup resolution order.
pub async fn create_client() -> Result<Client> {
    let config = resolve_config().await?;

    Client::try_from(config)
        .map_err(|e| PortholeError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Resolve a client configuration, taking the first strategy that applies.
async fn resolve_config() -> Result<Config> {
    if in_cluster_environment() {
        info!("Using in-cluster service account configuration");
        return Config::incluster().map_err(|e| {
            PortholeError::KubeconfigError(format!("Failed to load in-cluster config: {}", e))
        });
    }

    for path in kubeconfig_candidates() {
        if path.exists() {
            info!("Using kubeconfig at {}", path.display());
            return config_from_file(&path).await;
        }
        debug!("No kubeconfig at {}", path.display());
    }

    info!("No kubeconfig found, falling back to default config inference");
    Config::infer().await.map_err(|e| {
        PortholeError::KubeconfigError(format!("Failed to infer configuration: {}", e))
    })
}

/// In-cluster mode requires the service host marker and both mounted
/// credential files.
fn in_cluster_environment() -> bool {
    env::var(IN_CLUSTER_ENV).is_ok_and(|v| !v.is_empty())
        && Path::new(service_account::TOKEN_PATH).exists()
        && Path::new(service_account::CA_PATH).exists()
}

/// Kubeconfig file candidates in priority order.
fn kubeconfig_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(KUBECONFIG_ENV) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(home) = env::var("HOME") {
        candidates.push(PathBuf::from(home).join(".kube").join("config"));
    }

    candidates
}

/// Load a client configuration from a kubeconfig file on disk.
async fn config_from_file(path: &Path) -> Result<Config> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        PortholeError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            PortholeError::KubeconfigError(format!(
                "Failed to load kubeconfig {}: {}",
                path.display(),
                e
            ))
        })
}
