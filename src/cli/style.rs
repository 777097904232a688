//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips colors when stdout is not a
//! terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Semantic styles for CLI output
pub trait Stylize {
    /// Names the user may want to act on
    fn accent(&self) -> String;
    /// Secondary information
    fn muted(&self) -> String;
    /// Headings
    fn emphasis(&self) -> String;
    /// Things that went wrong
    fn failure(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn failure(&self) -> String {
        self.red().to_string()
    }
}

/// Success marker
pub fn check() -> String {
    "✓".green().to_string()
}

/// Clear marker
pub fn cross() -> String {
    "✗".yellow().to_string()
}
