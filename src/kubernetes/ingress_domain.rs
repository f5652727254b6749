// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster ingress domain lookup

use crate::constants::CLUSTER_INGRESS_NAME;
use crate::error::{MutatorError, Result};
use crate::types::ClusterIngress;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Read the ingress domain from the cluster-wide ingress configuration.
///
/// Fetched on every call; nothing is cached between admission requests.
#[instrument(skip(client))]
pub async fn get_cluster_ingress_domain(client: &Client) -> Result<String> {
    let ingresses: Api<ClusterIngress> = Api::all(client.clone());

    let ingress = ingresses
        .get(CLUSTER_INGRESS_NAME)
        .await
        .map_err(MutatorError::IngressDomainLookup)?;

    debug!("Cluster ingress domain is '{}'", ingress.domain());
    Ok(ingress.domain().to_string())
}
