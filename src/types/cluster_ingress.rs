// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Cluster-wide ingress configuration (`ingresses.config.openshift.io`).
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(group = "config.openshift.io", version = "v1", kind = "Ingress")]
#[kube(root = "ClusterIngress", plural = "ingresses")]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct ClusterIngressSpec {
    /// Base domain for default ingress controller hostnames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apps_domain: Option<String>,
}

impl ClusterIngress {
    /// The cluster ingress domain, empty when unset
    pub fn domain(&self) -> &str {
        self.spec.domain.as_deref().unwrap_or_default()
    }
}
