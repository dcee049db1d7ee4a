//! Simple SDK Example
//!
//! Demonstrates basic usage of the Wrservices SDK.
//!
//! # Usage
//!
//! ```bash
//! WRSERVICES_API_KEY=... WRSERVICES_SECRET=... cargo run --example simple
//! ```
//!
//! Set `WRSERVICES_LOG_FORMAT=json` for structured logs and
//! `RUST_LOG=wrservices_core=debug` to see each request.

use anyhow::{Context, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wrservices_infra_http::{HttpTransport, HttpTransportConfig};
use wrservices_sdk::endpoints::{self, SERVICE, VERSION};
use wrservices_sdk::{ClientConfig, ClientError, RatereviewClient, SdkError};

fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format =
        std::env::var("WRSERVICES_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("wrservices=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init(),
    }

    // 2. Build the client
    let config = ClientConfig::from_env(SERVICE, VERSION);
    let transport = HttpTransport::new(HttpTransportConfig::default())
        .context("Failed to create HTTP transport")?;
    let client = RatereviewClient::with_transport(config, Arc::new(transport));

    // 3. Introspection
    println!("Available endpoints:");
    for (method, _) in endpoints::ENDPOINTS {
        println!("  {}", client.signature(method));
    }
    println!();

    // 4. A read call
    match client.get_average_rating(vec!["book:1"], json!({})) {
        Ok(average) => info!(%average, "Average rating"),
        Err(SdkError::Client(ClientError::InvalidInput(check))) => {
            println!("Server rejected input: {}", check)
        }
        Err(e) => return Err(e).context("getAverageRating failed"),
    }

    Ok(())
}
