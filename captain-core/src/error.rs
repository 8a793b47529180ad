//! Error types for Captain.
//!
//! All failures are raised synchronously to the immediate caller of the
//! builder or dispatcher method that triggered them:
//!
//! - [`CaptainError::InvalidCommand`] - Missing, empty or untokenizable input
//! - [`CaptainError::InvalidArgument`] - A builder method received a bad name or pattern
//! - [`CaptainError::InvalidConfig`] - A resolved config is unusable
//! - [`CaptainError::NoOrderFound`] - Nothing can handle the command

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Captain operations.
#[derive(Error, Debug)]
pub enum CaptainError {
    /// `command` was called with no input, empty input, or input whose first
    /// element is not a usable command name.
    #[error("invalid command: {reason}")]
    InvalidCommand {
        /// What was wrong with the input.
        reason: String,
        /// Tokenizer failure, if that is what rejected the input.
        #[source]
        source: Option<BoxError>,
    },

    /// A builder method was called with an unusable argument.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A config produced during resolution cannot be used.
    #[error("invalid config at position {position}: {reason}")]
    InvalidConfig {
        /// Index of the store entry the config came from.
        position: usize,
        /// What was wrong with it.
        reason: String,
        /// Factory failure, if that is what produced the error.
        #[source]
        source: Option<BoxError>,
    },

    /// No order matches the command name and no default order is registered.
    #[error("no order found for command `{command}` and no default order is registered")]
    NoOrderFound {
        /// The command name that was looked up.
        command: String,
    },
}

impl CaptainError {
    pub(crate) fn invalid_command(reason: impl Into<String>) -> Self {
        CaptainError::InvalidCommand {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an [`CaptainError::InvalidArgument`] error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        CaptainError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(position: usize, reason: impl Into<String>) -> Self {
        CaptainError::InvalidConfig {
            position,
            reason: reason.into(),
            source: None,
        }
    }
}
