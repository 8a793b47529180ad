//! Shell-style tokenizing.

use captain_core::{BoxError, Tokenizer};
use thiserror::Error;

/// Errors raised while tokenizing a command string.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The input ended inside a quote or after a trailing backslash.
    #[error("unterminated quote or escape in `{0}`")]
    Unterminated(String),
}

/// Splits text the way a POSIX shell would, without expansion.
///
/// `echo "hello world"` becomes `["echo", "hello world"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellTokenizer;

impl ShellTokenizer {
    /// Create a new shell tokenizer.
    pub const fn new() -> Self {
        Self
    }
}

impl Tokenizer for ShellTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, BoxError> {
        shlex::split(text).ok_or_else(|| TokenizeError::Unterminated(text.to_string()).into())
    }
}
