//! Logging inspection for response observation.

use captain_core::Inspection;
use std::fmt::Debug;

/// An inspection that logs each response and passes it through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInspection {
    label: &'static str,
}

impl LoggingInspection {
    /// Create a logging inspection tagged with `label`.
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// The label attached to log records.
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl<R: Debug> Inspection<R> for LoggingInspection {
    fn inspect(&self, response: R) -> R {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(label = self.label, ?response, "command response");
        }
        response
    }
}
