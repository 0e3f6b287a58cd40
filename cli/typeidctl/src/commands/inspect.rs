//! Inspect command (parse TypeIDs).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use typeid::{generator, TypeId};
use uuid::Uuid;

use crate::output::{print_output, OutputFormat};

/// Inspect command - show the parts of one or more TypeIDs.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// TypeIDs to inspect.
    #[arg(required = true)]
    ids: Vec<String>,
}

/// The decoded parts of a TypeID.
#[derive(Debug, Serialize, Tabled)]
pub struct IdReport {
    #[tabled(rename = "ID")]
    id: String,
    #[serde(rename = "type")]
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Suffix")]
    suffix: String,
    #[tabled(rename = "UUID")]
    uuid: Uuid,
    #[tabled(rename = "Timestamp")]
    timestamp: DateTime<Utc>,
    #[tabled(rename = "Sequence")]
    sequence: u16,
}

impl IdReport {
    fn from_id(id: &TypeId) -> Self {
        let uuid = id.uuid();
        Self {
            id: id.to_string(),
            type_name: id.type_name().to_string(),
            suffix: id.suffix().to_string(),
            uuid,
            timestamp: id.timestamp(),
            sequence: generator::sequence(&uuid),
        }
    }
}

impl InspectCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let reports = self.reports()?;
        print_output(&reports, format);
        Ok(())
    }

    fn reports(&self) -> Result<Vec<IdReport>> {
        self.ids
            .iter()
            .map(|raw| {
                TypeId::parse(raw)
                    .map(|id| IdReport::from_id(&id))
                    .with_context(|| format!("invalid TypeID '{raw}'"))
            })
            .collect()
    }
}
