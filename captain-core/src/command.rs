//! Command input and validation.

use crate::error::{BoxError, CaptainError};
use std::ops::Deref;

/// Splits a shell-like string into an argument vector.
///
/// Quoting and escaping rules belong to the implementation.
pub trait Tokenizer: Send + Sync + 'static {
    /// Tokenize `text`.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, BoxError>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>, BoxError> + Send + Sync + 'static,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>, BoxError> {
        (self)(text)
    }
}

/// Raw input to `command`: a string, an argument vector, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// No input was supplied.
    Missing,
    /// A shell-like string, tokenized before dispatch.
    Text(String),
    /// An argument vector used directly.
    Args(Vec<String>),
}

impl CommandLine {
    /// Validate the input and turn it into an argument vector.
    pub fn parse(self, tokenizer: &dyn Tokenizer) -> Result<Argv, CaptainError> {
        let args = match self {
            CommandLine::Missing => {
                return Err(CaptainError::invalid_command("no command supplied"));
            }
            CommandLine::Text(text) => {
                tokenizer
                    .tokenize(&text)
                    .map_err(|source| CaptainError::InvalidCommand {
                        reason: format!("could not tokenize `{text}`"),
                        source: Some(source),
                    })?
            }
            CommandLine::Args(args) => args,
        };
        Argv::new(args)
    }
}

impl From<&str> for CommandLine {
    fn from(text: &str) -> Self {
        CommandLine::Text(text.to_string())
    }
}

impl From<String> for CommandLine {
    fn from(text: String) -> Self {
        CommandLine::Text(text)
    }
}

impl From<&String> for CommandLine {
    fn from(text: &String) -> Self {
        CommandLine::Text(text.clone())
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(args: Vec<String>) -> Self {
        CommandLine::Args(args)
    }
}

impl From<Vec<&str>> for CommandLine {
    fn from(args: Vec<&str>) -> Self {
        CommandLine::Args(args.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for CommandLine {
    fn from(args: &[String]) -> Self {
        CommandLine::Args(args.to_vec())
    }
}

impl From<&[&str]> for CommandLine {
    fn from(args: &[&str]) -> Self {
        CommandLine::Args(args.iter().map(|arg| arg.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(args: [&str; N]) -> Self {
        CommandLine::Args(args.iter().map(|arg| arg.to_string()).collect())
    }
}

impl<T: Into<CommandLine>> From<Option<T>> for CommandLine {
    fn from(input: Option<T>) -> Self {
        input.map_or(CommandLine::Missing, Into::into)
    }
}

/// A validated argument vector: never empty, and the command name is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argv(Vec<String>);

impl Argv {
    /// Validate an argument vector.
    pub fn new(args: Vec<String>) -> Result<Self, CaptainError> {
        match args.first() {
            None => Err(CaptainError::invalid_command("command is empty")),
            Some(name) if name.is_empty() => {
                Err(CaptainError::invalid_command("command name is empty"))
            }
            Some(_) => Ok(Self(args)),
        }
    }

    /// The command name (first element).
    pub fn command_name(&self) -> &str {
        &self.0[0]
    }

    /// Arguments after the command name.
    pub fn rest(&self) -> &[String] {
        &self.0[1..]
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Argv {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
