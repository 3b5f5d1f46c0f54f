//! Walkthrough Entry Point
//!
//! Prints every listfold demonstration to stdout. Set `RUST_LOG` to adjust
//! logging, and `WALKTHROUGH_LONG_LIST_LENGTH` / `WALKTHROUGH_FACTORIAL_INPUT`
//! to change the inputs.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::{WalkthroughConfig, WalkthroughError, render, run_all};

fn run() -> Result<(), WalkthroughError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,walkthrough=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    tracing::info!("Starting listfold walkthrough...");

    let config = WalkthroughConfig::from_env()?;
    tracing::info!(
        "Configuration loaded: long_list_length={}, factorial_input={}",
        config.long_list_length,
        config.factorial_input
    );

    let sections = run_all(&config)?;
    println!("{}", render(&sections));

    tracing::info!(sections = sections.len(), "Walkthrough finished");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("walkthrough failed: {error}");
            ExitCode::FAILURE
        }
    }
}
