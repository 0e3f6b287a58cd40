//! New command (generate TypeIDs).

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use typeid::{validate_type, TypeId, TypeIdDecoded, TypeIdError};

use crate::output::{print_ids, OutputFormat};

/// New command - generate fresh TypeIDs.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Type prefix. Omit for an id without a type.
    #[arg(default_value = "")]
    type_name: String,

    /// Number of ids to generate.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
}

impl NewCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let ids = self.generate()?;
        debug!(type_name = %self.type_name, count = ids.len(), "generated ids");
        print_ids(&ids, format);
        Ok(())
    }

    fn generate(&self) -> Result<Vec<TypeId>> {
        validate_type(&self.type_name)
            .map_err(TypeIdError::from)
            .with_context(|| format!("invalid type '{}'", self.type_name))?;

        // Validated once above; every id shares the type.
        Ok((0..self.count)
            .map(|_| TypeIdDecoded::generate_unchecked(self.type_name.as_str()).encode())
            .collect())
    }
}
