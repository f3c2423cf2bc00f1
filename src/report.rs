//! Terminal failure reporting for binder consumers
//!
//! Consumers treat every binding failure identically: print the error,
//! print the usage text when the failure carries one, and exit non-zero.

use colored::Colorize;

use crate::error::BindError;

/// Print a binding failure and any usage text it carries to stderr
pub fn fail(err: &BindError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    if let Some(usage) = err.usage() {
        eprintln!();
        eprintln!("{}", usage);
    }
}
