//! Map inspection for response transformation.

use captain_core::Inspection;

/// An inspection that replaces the response with the mapper's output.
pub struct MapInspection<F> {
    mapper: F,
}

impl<F> MapInspection<F> {
    /// Create a new map inspection.
    pub fn new(mapper: F) -> Self {
        Self { mapper }
    }
}

impl<R, F> Inspection<R> for MapInspection<F>
where
    F: Fn(R) -> R + Send + Sync + 'static,
{
    fn inspect(&self, response: R) -> R {
        (self.mapper)(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspections::ConditionalInspection;

    #[test]
    fn test_map_transforms_response() {
        let shout = MapInspection::new(|r: String| r.to_uppercase());
        assert_eq!(shout.inspect("hello".to_string()), "HELLO");
    }

    #[test]
    fn test_map_composes_with_condition() {
        let negate =
            ConditionalInspection::new(|n: &i32| *n > 10, MapInspection::new(|n: i32| -n));
        assert_eq!(negate.inspect(20), -20);
        assert_eq!(negate.inspect(5), 5);
    }
}
