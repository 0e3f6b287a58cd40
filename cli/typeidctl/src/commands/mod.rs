//! CLI commands.

mod from_uuid;
mod inspect;
mod new;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// typeid - generate and inspect type-safe, sortable identifiers.
#[derive(Debug, Parser)]
#[command(name = "typeid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to TYPEID_OUTPUT, or text.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new TypeIDs.
    New(new::NewCommand),

    /// Parse TypeIDs and show their parts.
    Inspect(inspect::InspectCommand),

    /// Format an existing UUID as a TypeID.
    FromUuid(from_uuid::FromUuidCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<()> {
        let format = self.output.unwrap_or(config.output);

        match self.command {
            Commands::New(cmd) => cmd.run(format),
            Commands::Inspect(cmd) => cmd.run(format),
            Commands::FromUuid(cmd) => cmd.run(format),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let cli = Cli::try_parse_from(["typeid", "--output", "json", "new", "user"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
