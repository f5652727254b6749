// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission handling for Namespaces.

use super::patch::decode;
use super::AdmissionRequest;
use crate::config::Config;
use crate::error::Result;
use crate::mutation::label_namespace;
use k8s_openapi::api::core::v1::Namespace;

/// Label the admitted namespace with its environment and return the resulting patch.
///
/// Namespaces are never bypassed and need no cluster lookups.
pub fn mutate(config: &Config, req: &AdmissionRequest) -> Result<json_patch::Patch> {
    let mut decoded = decode::<Namespace>(req, "Namespace")?;
    label_namespace(&mut decoded.object, &config.environments);
    decoded.patch()
}
