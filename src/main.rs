// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use env_route_ns_mutator::config::Config;
use env_route_ns_mutator::constants::ENVIRONMENTS_VAR;
use env_route_ns_mutator::server::{serve, shutdown_signal};
use env_route_ns_mutator::webhook::Admission;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, defaulting to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting environment mutating webhook");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: environments={:?}, bind_address={}",
        config.environments, config.bind_address
    );
    if config.environments.iter().all(String::is_empty) {
        warn!("No environments configured, set {} to a comma-separated list", ENVIRONMENTS_VAR);
    }

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    let admission = Admission::new(client, Arc::new(config));

    serve(listener, admission, shutdown_signal()).await?;

    info!("Webhook server stopped");
    Ok(())
}
