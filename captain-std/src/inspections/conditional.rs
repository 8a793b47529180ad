//! Conditional Inspection - Transform responses that satisfy a predicate.

use captain_core::Inspection;

/// An inspection that only runs its inner inspection when the predicate holds.
///
/// When the predicate is `false`, the response is passed through unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use captain_std::inspections::ConditionalInspection;
///
/// // Only trim responses that carry trailing whitespace
/// let trim = ConditionalInspection::new(
///     |r: &String| r.ends_with(char::is_whitespace),
///     |r: String| r.trim_end().to_string(),
/// );
/// ```
pub struct ConditionalInspection<P, I> {
    predicate: P,
    inner: I,
}

impl<P, I> ConditionalInspection<P, I> {
    /// Create a new `ConditionalInspection`.
    pub fn new(predicate: P, inner: I) -> Self {
        Self { predicate, inner }
    }
}

impl<R, P, I> Inspection<R> for ConditionalInspection<P, I>
where
    P: Fn(&R) -> bool + Send + Sync + 'static,
    I: Inspection<R>,
{
    fn inspect(&self, response: R) -> R {
        if (self.predicate)(&response) {
            self.inner.inspect(response)
        } else {
            response
        }
    }
}
