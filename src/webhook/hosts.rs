// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission handling for resources exposing hostnames (Ingress, Route).

use super::patch::decode;
use super::AdmissionRequest;
use crate::config::Config;
use crate::error::{MutatorError, Result};
use crate::kubernetes::{get_cluster_ingress_domain, get_namespace};
use crate::mutation::{mutate_hosts, HostMutation, ObjectRef};
use kube::{Client, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

/// Rewrite the hosts of the admitted object and return the resulting patch
pub async fn mutate<K>(
    client: &Client,
    config: &Config,
    req: &AdmissionRequest,
) -> Result<json_patch::Patch>
where
    K: HostMutation + DeserializeOwned + Serialize,
{
    let mut decoded = decode::<K>(req, K::KIND)?;

    let namespace_name = req
        .namespace
        .clone()
        .or_else(|| decoded.object.namespace())
        .ok_or(MutatorError::MissingNamespace)?;
    let namespace = get_namespace(client, &namespace_name).await?;
    let domain = get_cluster_ingress_domain(client).await?;

    // The API server may not have generated a name yet
    let object_ref = ObjectRef {
        name: decoded
            .object
            .meta()
            .name
            .clone()
            .unwrap_or_else(|| req.name.clone()),
        namespace: decoded.object.namespace().unwrap_or(namespace_name),
    };

    if mutate_hosts(
        &mut decoded.object,
        &object_ref,
        namespace.labels(),
        &config.environments,
        &domain,
    ) {
        info!(kind = K::KIND, name = %object_ref.name, namespace = %object_ref.namespace, "Mutated hosts");
    }

    decoded.patch()
}
