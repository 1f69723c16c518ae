// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default HTTP listen port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable set by Kubernetes inside a pod, used as the
/// in-cluster marker
pub const IN_CLUSTER_ENV: &str = "KUBERNETES_SERVICE_HOST";

/// Environment variable holding an explicit kubeconfig path override
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Conventional service-account credential paths mounted into pods
pub mod service_account {
    /// Bearer token for the pod's service account
    pub const TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";
    /// CA bundle used to verify the API server
    pub const CA_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/ca.crt";
}
