//! Configuration bootstrap.
//!
//! Resolves the active profile the same way the hosting application does at
//! startup, then prints its settings as JSON. Secret values are redacted.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Print the active profile
//!
//! Any invalid value aborts with a non-zero exit status.

use env_profile_config::AppConfig;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(
                variable = err.variable().unwrap_or("-"),
                error = %err,
                "Invalid configuration"
            );
            return Err(err.into());
        }
    };
    tracing::info!("Configuration loaded");

    let mut settings = Map::new();
    for (key, value) in config.settings.redacted_entries() {
        settings.insert(key.to_string(), serde_json::to_value(value)?);
    }

    let output = json!({
        "environment": config.environment,
        "record": config.record_name(),
        "mock_email": config.should_mock_email(),
        "settings": Value::Object(settings),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
