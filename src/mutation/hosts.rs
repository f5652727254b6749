// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Host mutation shared by every resource that exposes hostnames.

use super::hostname::rewrite_hostname;
use super::labels::{is_bypassed, match_environment};
use crate::types::Route;
use k8s_openapi::api::networking::v1::Ingress;
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A resource carrying one or more hostnames that follow the environment
pub trait HostMutation: ResourceExt {
    /// Resource kind used in logs and errors
    const KIND: &'static str;

    /// Mutable references to every hostname slot on the object
    fn hosts_mut(&mut self) -> Vec<&mut Option<String>>;
}

impl HostMutation for Ingress {
    const KIND: &'static str = "Ingress";

    fn hosts_mut(&mut self) -> Vec<&mut Option<String>> {
        self.spec
            .iter_mut()
            .flat_map(|spec| spec.rules.iter_mut().flatten())
            .map(|rule| &mut rule.host)
            .collect()
    }
}

impl HostMutation for Route {
    const KIND: &'static str = "Route";

    fn hosts_mut(&mut self) -> Vec<&mut Option<String>> {
        vec![&mut self.spec.host]
    }
}

/// Object identity used when generating a hostname
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRef {
    pub name: String,
    pub namespace: String,
}

/// Rewrite every host on `obj` for the namespace's environment.
///
/// Returns true when at least one host changed.
pub fn mutate_hosts<K: HostMutation>(
    obj: &mut K,
    object_ref: &ObjectRef,
    namespace_labels: &BTreeMap<String, String>,
    environments: &[String],
    cluster_ingress_domain: &str,
) -> bool {
    if is_bypassed(namespace_labels) {
        info!(kind = K::KIND, name = %object_ref.name, "Bypassing mutation");
        return false;
    }

    let Some(env) = match_environment(namespace_labels, environments) else {
        debug!(
            kind = K::KIND,
            namespace = %object_ref.namespace,
            "Namespace has no configured environment, skipping"
        );
        return false;
    };

    let mut changed = false;
    for host in obj.hosts_mut() {
        let current = host.as_deref().unwrap_or_default();
        let rewritten = rewrite_hostname(
            &object_ref.name,
            &object_ref.namespace,
            current,
            env,
            cluster_ingress_domain,
        );
        if rewritten != current {
            *host = Some(rewritten);
            changed = true;
        }
    }
    changed
}
