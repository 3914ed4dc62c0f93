//! Utilities module - Coloured status lines for the CLI
//!
//! Every line is indented under the command banner and led by a marker;
//! `print_field` lines align their labels so results read as a table.

use colored::*;
use std::path::Path;

fn line(marker: ColoredString, message: &str) {
    println!("   {} {}", marker, message);
}

/// Progress inside a command
pub fn print_step(message: &str) {
    line("→".bright_blue(), message);
}

/// Command finished
pub fn print_success(message: &str) {
    line("✓".bright_green(), message);
}

/// Failure, on stderr
pub fn print_error(message: &str) {
    eprintln!("   {} {}", "✗".bright_red(), message);
}

/// `label: value` result line, value highlighted
pub fn print_field(label: &str, value: &str) {
    println!("   {:<12} {}", format!("{label}:").bright_black(), value.bright_cyan());
}

pub fn print_path(label: &str, path: &Path) {
    print_field(label, &path.display().to_string());
}
