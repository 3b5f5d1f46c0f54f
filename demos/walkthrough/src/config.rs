//! Walkthrough configuration.
//!
//! Loads settings from environment variables, with defaults for every value.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Default length of the list used by the stack-safety demonstration.
pub const DEFAULT_LONG_LIST_LENGTH: usize = 100_000;

/// Default input of the factorial demonstration.
pub const DEFAULT_FACTORIAL_INPUT: u64 = 5;

/// Configuration loading error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Walkthrough configuration.
///
/// # Fields
///
/// - `long_list_length`: size of the list folded by the stack-safety section
///   (`WALKTHROUGH_LONG_LIST_LENGTH`)
/// - `factorial_input`: argument of the factorial section
///   (`WALKTHROUGH_FACTORIAL_INPUT`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Number of elements in the long list.
    pub long_list_length: usize,
    /// Input of the factorial demonstration.
    pub factorial_input: u64,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            long_list_length: DEFAULT_LONG_LIST_LENGTH,
            factorial_input: DEFAULT_FACTORIAL_INPUT,
        }
    }
}

impl WalkthroughConfig {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let long_list_length = get_optional_parsed(
            &lookup,
            "WALKTHROUGH_LONG_LIST_LENGTH",
            DEFAULT_LONG_LIST_LENGTH,
        )?;
        let factorial_input = get_optional_parsed(
            &lookup,
            "WALKTHROUGH_FACTORIAL_INPUT",
            DEFAULT_FACTORIAL_INPUT,
        )?;

        Ok(Self {
            long_list_length,
            factorial_input,
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn get_optional_parsed<T, L>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    L: Fn(&str) -> Option<String>,
{
    lookup(key).map_or_else(
        || Ok(default),
        |value| {
            value
                .trim()
                .parse()
                .map_err(|error: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
