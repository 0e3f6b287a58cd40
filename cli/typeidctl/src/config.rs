//! CLI configuration (env-driven).

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;

use crate::output::OutputFormat;

/// CLI configuration. Command-line flags take precedence.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Default output format.
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = lookup("TYPEID_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let output = lookup("TYPEID_OUTPUT")
            .map(|v| OutputFormat::from_str(&v, true).map_err(|e| anyhow!(e)))
            .transpose()
            .context("TYPEID_OUTPUT must be 'text' or 'json'.")?
            .unwrap_or_default();

        Ok(Self { log_level, output })
    }
}
