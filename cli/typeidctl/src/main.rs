//! typeid - generate and inspect TypeIDs from the command line.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // Prefer RUST_LOG, fall back to TYPEID_LOG_LEVEL. Logs go to stderr so
    // stdout stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(&config) {
        exit_with(&e);
    }
}

fn exit_with(err: &anyhow::Error) -> ! {
    error::print_error(err);
    std::process::exit(1);
}
