//! # Orders
//!
//! An order produces the primary response to a command. It receives the full
//! argument vector (command name first) and the context the dispatcher was
//! resolved against.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|args: &[String], ctx: &Ctx| args.len()`
//! 2. **Plain function**: `fn run(args: &[String], ctx: &Ctx) -> Response`
//! 3. **Struct implementation**: `impl Order<Ctx, Response> for MyOrder`

use std::sync::Arc;

/// The handler responsible for the primary response to a command.
///
/// The response type `R` is opaque to the dispatcher and passed through
/// unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an order for context `{C}`",
    label = "missing `Order<{C}, {R}>` implementation",
    note = "Orders are `Fn(&[String], &{C}) -> {R}` or implement `Order` directly."
)]
pub trait Order<C, R>: Send + Sync + 'static {
    /// Handle the command described by `args`.
    fn call(&self, args: &[String], context: &C) -> R;
}

// Blanket impl for closures and functions
impl<F, C, R> Order<C, R> for F
where
    F: Fn(&[String], &C) -> R + Send + Sync + 'static,
{
    fn call(&self, args: &[String], context: &C) -> R {
        (self)(args, context)
    }
}

/// A shared, type-erased order.
pub type SharedOrder<C, R> = Arc<dyn Order<C, R>>;
