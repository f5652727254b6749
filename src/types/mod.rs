// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OpenShift resources not covered by k8s-openapi.

pub mod cluster_ingress;
pub mod route;

pub use cluster_ingress::{ClusterIngress, ClusterIngressSpec};
pub use route::{Route, RouteSpec, RouteStatus, RouteTargetReference};
