// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lookups

use crate::error::{MutatorError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Fetch a namespace by name
#[instrument(skip(client))]
pub async fn get_namespace(client: &Client, name: &str) -> Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    let namespace = namespaces
        .get(name)
        .await
        .map_err(|source| MutatorError::NamespaceLookup {
            name: name.to_string(),
            source,
        })?;

    debug!("Fetched namespace {}", name);
    Ok(namespace)
}
