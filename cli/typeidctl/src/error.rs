//! Error display for the CLI.

use colored::Colorize;
use typeid::TypeIdError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), render(err));

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

/// One-line message with the context chain, `outer: inner`.
pub fn render(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let typeid_err = err.chain().find_map(|e| e.downcast_ref::<TypeIdError>())?;
    if typeid_err.is_type_error() {
        Some("Hint: types are 0-63 characters of a-z and '_', and can't start or end with '_'.")
    } else if typeid_err.is_suffix_error() {
        Some("Hint: the suffix is 26 lowercase base32 characters (0-9, a-z without i, l, o, u), starting with 0-7.")
    } else {
        None
    }
}
