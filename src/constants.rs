// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace label keys read and written by the mutator
pub mod labels {
    /// Holds the environment a namespace belongs to
    pub const ENVIRONMENT: &str = "environment";
    /// When set to "true", hosts in this namespace are left alone
    pub const BYPASS: &str = "haproxy.router.dana.io/bypass-env-mutation";
}

/// Namespace annotation keys
pub mod annotations {
    /// Default tolerations applied by the PodTolerationRestriction admission plugin
    pub const DEFAULT_TOLERATIONS: &str = "scheduler.alpha.kubernetes.io/defaultTolerations";
}

/// Name of the singleton `ingresses.config.openshift.io` object
pub const CLUSTER_INGRESS_NAME: &str = "cluster";

/// Environment variable holding the comma-separated environment list
pub const ENVIRONMENTS_VAR: &str = "environments";

/// Webhook server configuration
pub mod server {
    pub const BIND_ADDRESS_VAR: &str = "WEBHOOK_BIND_ADDRESS";
    pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9443";
}

/// HTTP paths served by the webhook
pub mod paths {
    pub const MUTATE_INGRESS: &str = "/mutate-v1-ingress";
    pub const MUTATE_ROUTE: &str = "/mutate-v1-route";
    pub const MUTATE_NAMESPACE: &str = "/mutate-v1-namespace";
    pub const HEALTHZ: &str = "/healthz";
    pub const READYZ: &str = "/readyz";
}
