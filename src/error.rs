// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutatorError {
    #[error("admission request carries no object")]
    MissingObject,

    #[error("failed to decode {kind} object: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to get namespace {name}: {source}")]
    NamespaceLookup {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("admission request has no namespace")]
    MissingNamespace,

    #[error("failed to get cluster ingress: {0}")]
    IngressDomainLookup(#[source] kube::Error),

    #[error("failed to encode mutated object: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to serialize patch: {0}")]
    Patch(#[from] kube::core::admission::SerializePatchError),
}

pub type Result<T> = std::result::Result<T, MutatorError>;
