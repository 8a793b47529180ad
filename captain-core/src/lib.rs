//! # captain-core
//!
//! Core configuration and resolution engine for the Captain command dispatcher.
//!
//! This crate has minimal dependencies and is generic over the context type `C`
//! handed to orders and factories, and the response type `R` produced by orders.
//! The `captain` crate instantiates `C` with its own dispatcher.
//!
//! # Building Blocks
//!
//! ## Orders ([`Order`])
//!
//! The handler that produces the primary response to a command. An order is
//! registered under an exact command name, or in the single default slot.
//!
//! ## Inspections ([`Inspection`])
//!
//! Response transformers selected by matching the command name against a
//! [`Selector`]. Every matching inspection runs, in registration order, each
//! receiving the previous one's output.
//!
//! ## Configs ([`Config`], [`ConfigEntry`])
//!
//! A closed sum of Order and Inspection declarations. A [`ConfigEntry`] is
//! either a static [`Config`] or a [`ConfigFactory`] that produces configs from
//! the context at resolution time.
//!
//! ## Store and Resolution ([`ConfigStore`], [`Resolver`])
//!
//! The store is a persistent append-only sequence. Appending returns a new store
//! sharing the old prefix. The [`Resolver`] materializes factories and folds the
//! result into an [`OrderTable`] and an [`InspectionList`].
//!
//! # Error Types
//!
//! - [`CaptainError`] - Every failure raised by the builder and dispatcher
//! - [`BoxError`] - Escape hatch for user-supplied factories and tokenizers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod inspection;
mod order;
mod resolver;
mod selector;
mod store;

// Re-exports
pub use command::{Argv, CommandLine, Tokenizer};
pub use config::{Config, ConfigEntry, ConfigFactory, ConfigKind, IntoConfigEntries, IntoConfigs};
pub use error::{BoxError, CaptainError};
pub use inspection::{Inspection, SharedInspection};
pub use order::{Order, SharedOrder};
pub use resolver::{Diagnostics, InspectionList, OrderTable, Resolution, Resolver};
pub use selector::Selector;
pub use store::ConfigStore;
