//! Runtime settings read from the environment.

use captain_core::Diagnostics;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Variable selecting the [`Environment`].
pub const ENV_VAR: &str = "CAPTAIN_ENV";

/// Variable overriding the default log filter directive.
pub const LOG_VAR: &str = "CAPTAIN_LOG";

/// Errors raised while reading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The environment name is not recognised.
    #[error("unknown environment `{0}` (expected `development` or `production`)")]
    UnknownEnvironment(String),
}

/// The mode the program runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Resolution warnings are logged.
    Development,
    /// Quiet.
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(SettingsError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Settings shared by the dispatcher and the binary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// The mode the program runs in.
    pub environment: Environment,
    /// Explicit log filter directive, if any.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Settings for development mode.
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            log_filter: None,
        }
    }

    /// Read settings from the process environment.
    ///
    /// An unrecognised environment name falls back to production.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_default()
    }

    /// Read settings through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_VAR) {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };
        let log_filter = lookup(LOG_VAR).filter(|value| !value.trim().is_empty());
        Ok(Self {
            environment,
            log_filter,
        })
    }

    /// Whether resolution warnings are logged.
    pub fn diagnostics(&self) -> Diagnostics {
        match self.environment {
            Environment::Development => Diagnostics::enabled(),
            Environment::Production => Diagnostics::disabled(),
        }
    }

    /// The log filter directive to use when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &str {
        match (&self.log_filter, self.environment) {
            (Some(filter), _) => filter.as_str(),
            (None, Environment::Development) => "debug",
            (None, Environment::Production) => "warn",
        }
    }
}
