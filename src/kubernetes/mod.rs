// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes lookups for the state the mutators depend on.

pub mod ingress_domain;
pub mod namespaces;

pub use ingress_domain::get_cluster_ingress_domain;
pub use namespaces::get_namespace;
