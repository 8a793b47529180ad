//! # captain-std
//!
//! Standard collaborators for the Captain command dispatcher.
//!
//! This crate provides:
//! - **Tokenizing**: [`ShellTokenizer`](tokenizer::ShellTokenizer)
//! - **Default order**: [`spawn_order`](process::spawn_order), launching the
//!   command as an external process
//! - **Standard inspections**: Logging, Conditional, Map
//! - **Testing utilities**: Recording and counting orders/inspections

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use captain_core;

// Modules
pub mod inspections;
pub mod process;
pub mod testing;
pub mod tokenizer;
