//! Operator-facing output.
//!
//! Everything here writes to stderr: stdout carries only the computed
//! version string, so callers can capture it.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_warning(message: &str) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", message); // Yellow color
}

pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}
