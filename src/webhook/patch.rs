// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decoding admission objects and turning mutations into JSON patches.

use super::AdmissionRequest;
use crate::error::{MutatorError, Result};
use kube::core::admission::AdmissionResponse;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

/// An admitted object in both raw and typed form
pub struct Decoded<K> {
    pub original: Value,
    pub object: K,
}

impl<K: Serialize> Decoded<K> {
    /// JSON patch from the raw object to the (possibly mutated) typed object
    pub fn patch(&self) -> Result<json_patch::Patch> {
        let mutated = serde_json::to_value(&self.object).map_err(MutatorError::Encode)?;
        Ok(json_patch::diff(&self.original, &mutated))
    }
}

/// Decode the request object into `K`, keeping its raw form for diffing
pub fn decode<K: DeserializeOwned>(req: &AdmissionRequest, kind: &'static str) -> Result<Decoded<K>> {
    let obj = req.object.as_ref().ok_or(MutatorError::MissingObject)?;
    let original = serde_json::to_value(obj).map_err(MutatorError::Encode)?;
    let object = serde_json::from_value(original.clone())
        .map_err(|source| MutatorError::Decode { kind, source })?;

    Ok(Decoded { original, object })
}

/// Allow the request, attaching the patch when it changes anything
pub fn patch_response(req: &AdmissionRequest, patch: json_patch::Patch) -> Result<AdmissionResponse> {
    let rsp = AdmissionResponse::from(req);
    if patch.0.is_empty() {
        return Ok(rsp);
    }

    debug!(uid = %req.uid, operations = patch.0.len(), "Patching object");
    Ok(rsp.with_patch(patch)?)
}

/// Reject the request with an internal server error
pub fn errored(req: &AdmissionRequest, error: &MutatorError) -> AdmissionResponse {
    let mut rsp = AdmissionResponse::from(req).deny(error.to_string());
    rsp.result.code = 500;
    rsp.result.reason = "InternalError".to_string();
    rsp
}
