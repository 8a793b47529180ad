//! # captain - Immutable Command Routing
//!
//! `captain` lets a program register per-command handlers ("orders") and
//! cross-cutting response transformers ("inspections"), then dispatch a command
//! line to the right order and pipe its response through the inspections that
//! apply. There is no global registry: every configuration call returns a new
//! dispatcher and leaves the old one usable.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use captain::prelude::*;
//!
//! let captain = Captain::new()
//!     .add_orders("greet", |args: &[String], _: &Captain<String>| {
//!         format!("hello {}", args[1..].join(" "))
//!     })?
//!     .add_inspection_pattern("^gr", |r: String| r.to_uppercase())?;
//!
//! assert_eq!(captain.command("greet world")?, "HELLO WORLD");
//! ```
//!
//! ## Running Programs
//!
//! [`captain()`] returns a dispatcher whose default order spawns the command as
//! an external process with inherited standard streams.
//!
//! ## Self-Reference
//!
//! Orders and factories receive the dispatcher they were resolved from, so an
//! order can re-dispatch (aliases) and a factory can inspect what is already
//! registered.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
pub mod logging;
pub mod settings;

pub use captain_core::{
    Argv, BoxError, CaptainError, CommandLine, Config, ConfigEntry, ConfigFactory, ConfigKind,
    ConfigStore, Diagnostics, Inspection, InspectionList, IntoConfigEntries, IntoConfigs, Order,
    OrderTable, Resolution, Resolver, Selector, SharedInspection, SharedOrder, Tokenizer,
};
pub use dispatcher::{Captain, CaptainConfig, CaptainConfigEntry};
pub use settings::{Environment, Settings, SettingsError};

/// Standard collaborators.
pub mod process {
    pub use captain_std::process::{Spawned, spawn, spawn_order};
}

/// Standard tokenizers.
pub mod tokenizer {
    pub use captain_std::tokenizer::{ShellTokenizer, TokenizeError};
}

/// Standard inspection implementations.
pub mod inspections {
    pub use captain_std::inspections::{ConditionalInspection, LoggingInspection, MapInspection};
}

/// Testing utilities.
pub mod testing {
    pub use captain_std::testing::{CountingOrder, EchoOrder, RecordingInspection, RecordingOrder};
}

/// A dispatcher whose default order runs the command as an external program.
///
/// Settings are read from the environment.
pub fn captain() -> Captain<process::Spawned> {
    Captain::standard()
}

/// Prelude module - common imports for Captain.
///
/// # Usage
///
/// ```rust,ignore
/// use captain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Captain, CaptainConfig, CaptainConfigEntry, CaptainError, CommandLine, Config,
        ConfigEntry, Inspection, Order, Selector, Settings,
    };
}
