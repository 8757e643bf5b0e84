use super::properties::{PROPERTY_COUNT, Property, PropertyVector};
use serde::Serialize;

/// Outcome of scoring one molecule: the QED score together with the inputs and the
/// per-property desirabilities it was computed from.
///
/// Desirabilities are present for all eight properties, including those whose weight was
/// zero in the profile used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QedReport {
    pub score: f64,
    pub properties: PropertyVector,
    pub desirabilities: [f64; PROPERTY_COUNT],
}

impl QedReport {
    #[inline]
    pub fn desirability(&self, property: Property) -> f64 {
        self.desirabilities[property.index()]
    }
}
