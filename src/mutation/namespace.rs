// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment labelling for namespaces carrying an environment toleration.

use super::labels::append_labels;
use crate::constants::{annotations, labels};
use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::info;

/// Default-toleration annotation value that marks a namespace as part of `env`.
///
/// The key is unquoted, so the value is not valid JSON; it is compared
/// verbatim, never parsed.
pub fn environment_toleration(env: &str) -> String {
    format!(
        "[{{\"operator\": \"Exists\", \"effect\": \"NoSchedule\", \"key\": {}}}]",
        env
    )
}

/// Label the namespace with the first environment whose toleration it carries.
///
/// Returns the environment applied, if any. Existing labels are kept.
pub fn label_namespace(namespace: &mut Namespace, environments: &[String]) -> Option<String> {
    let value = namespace
        .annotations()
        .get(annotations::DEFAULT_TOLERATIONS)?
        .clone();

    let env = environments
        .iter()
        .find(|env| value == environment_toleration(env))?;

    let labels = append_labels(
        namespace.metadata.labels.take(),
        BTreeMap::from([(labels::ENVIRONMENT.to_string(), env.clone())]),
    );
    namespace.metadata.labels = Some(labels);

    info!(
        namespace = %namespace.name_any(),
        environment = %env,
        "Labelled namespace with environment"
    );
    Some(env.clone())
}
