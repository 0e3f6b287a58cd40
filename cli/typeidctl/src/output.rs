//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use typeid::TypeId;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print bare ids, one per line in text mode.
pub fn print_ids(ids: &[TypeId], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for id in ids {
                println!("{id}");
            }
        }
        OutputFormat::Json => println!("{}", format_json(ids, "[]")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_as_json() {
        let ids = [
            TypeId::parse("type_01h455vb4pex5vsknk084sn02q").unwrap(),
            TypeId::parse("01h455vb4pex5vsknk084sn02q").unwrap(),
        ];
        let json = format_json(&ids[..], "[]");
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            ["type_01h455vb4pex5vsknk084sn02q", "01h455vb4pex5vsknk084sn02q"]
        );
    }
}
