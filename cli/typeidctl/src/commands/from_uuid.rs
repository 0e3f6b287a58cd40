//! From-uuid command (format an existing UUID).

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;
use typeid::{TypeId, TypeIdDecoded};
use uuid::Uuid;

use crate::output::{print_ids, OutputFormat};

/// From-uuid command - wrap an existing UUID in a TypeID.
#[derive(Debug, Args)]
pub struct FromUuidCommand {
    /// Type prefix (use "" for none).
    type_name: String,

    /// UUID in any format accepted by `Uuid::parse_str`.
    uuid: Uuid,
}

impl FromUuidCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let id = self.to_typeid()?;
        print_ids(&[id], format);
        Ok(())
    }

    fn to_typeid(&self) -> Result<TypeId> {
        if self.uuid.get_version_num() != 7 {
            warn!(
                uuid = %self.uuid,
                version = self.uuid.get_version_num(),
                "not a UUIDv7, the embedded timestamp is meaningless"
            );
        }

        let decoded = TypeIdDecoded::from_uuid(self.type_name.as_str(), self.uuid)
            .with_context(|| format!("invalid type '{}'", self.type_name))?;
        Ok(decoded.encode())
    }
}
