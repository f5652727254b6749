// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mutation rules: label evaluation, hostname rewriting and namespace labelling.

pub mod hostname;
pub mod hosts;
pub mod labels;
pub mod namespace;

pub use hostname::rewrite_hostname;
pub use hosts::{mutate_hosts, HostMutation, ObjectRef};
pub use labels::{append_labels, is_bypassed, match_environment};
pub use namespace::{environment_toleration, label_namespace};
