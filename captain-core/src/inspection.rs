//! Inspections: response transformers applied after an order runs.

use std::sync::Arc;

/// A transformer applied to an order's response.
///
/// Inspections are chained: each receives the previous response and returns
/// the next one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot inspect responses of type `{R}`",
    label = "missing `Inspection<{R}>` implementation",
    note = "Inspections are `Fn({R}) -> {R}` or implement `Inspection` directly."
)]
pub trait Inspection<R>: Send + Sync + 'static {
    /// Transform the response.
    fn inspect(&self, response: R) -> R;
}

impl<F, R> Inspection<R> for F
where
    F: Fn(R) -> R + Send + Sync + 'static,
{
    fn inspect(&self, response: R) -> R {
        (self)(response)
    }
}

/// A shared, type-erased inspection.
pub type SharedInspection<R> = Arc<dyn Inspection<R>>;
