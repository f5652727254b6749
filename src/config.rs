// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{server, ENVIRONMENTS_VAR};
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Mutator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment names in match precedence order
    pub environments: Vec<String>,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environments = list_environments(env::var(ENVIRONMENTS_VAR).ok().as_deref());

        let bind_address = env::var(server::BIND_ADDRESS_VAR)
            .unwrap_or_else(|_| server::DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse().with_context(|| {
            format!(
                "{} is not a valid socket address: {}",
                server::BIND_ADDRESS_VAR,
                bind_address
            )
        })?;

        Ok(Config {
            environments,
            bind_address,
        })
    }
}

/// Split a comma-separated environment list.
///
/// An unset list still yields one empty entry, so callers see `[""]`.
pub fn list_environments(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::to_string)
        .collect()
}
