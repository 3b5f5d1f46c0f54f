//! Walkthrough application for listfold.
//!
//! Runs each fold and derived list operation on the inputs from the
//! library's documentation, checks the results, and renders them as text.
//!
//! # Modules
//!
//! - [`config`]: Environment-based configuration
//! - [`error`]: Error type of a walkthrough run
//! - [`scenarios`]: The demonstrations themselves

pub mod config;
pub mod error;
pub mod scenarios;

pub use config::{ConfigError, WalkthroughConfig};
pub use error::WalkthroughError;
pub use scenarios::{Section, run_all};

/// Renders sections as the text printed to stdout.
#[must_use]
pub fn render(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            section
                .lines
                .iter()
                .fold(format!("== {} ==\n", section.title), |mut block, line| {
                    block.push_str("  ");
                    block.push_str(line);
                    block.push('\n');
                    block
                })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
