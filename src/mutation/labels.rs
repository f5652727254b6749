// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace label evaluation: bypass detection and environment matching.

use crate::constants::labels;
use std::collections::BTreeMap;

/// Check if the namespace labels opt out of mutation.
///
/// Only the exact value "true" counts.
pub fn is_bypassed(labels: &BTreeMap<String, String>) -> bool {
    labels.get(labels::BYPASS).is_some_and(|v| v == "true")
}

/// Return the first configured environment equal to the namespace's environment label
pub fn match_environment<'a>(
    labels: &BTreeMap<String, String>,
    environments: &'a [String],
) -> Option<&'a str> {
    // A missing label reads as "", so an empty configured name matches it
    let current = labels
        .get(labels::ENVIRONMENT)
        .map(String::as_str)
        .unwrap_or_default();

    environments
        .iter()
        .find(|env| env.as_str() == current)
        .map(String::as_str)
}

/// Merge `additions` into `existing`, never removing a key
pub fn append_labels(
    existing: Option<BTreeMap<String, String>>,
    additions: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = existing.unwrap_or_default();
    merged.extend(additions);
    merged
}
