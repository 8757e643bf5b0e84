use crate::core::desirability::curve::ads;
use crate::core::desirability::params::DesirabilityTable;
use crate::core::models::properties::{PROPERTY_COUNT, Property, PropertyVector};
use crate::core::models::report::QedReport;
use crate::core::models::weights::WeightVector;
use crate::engine::error::QedError;
use tracing::trace;

/// Maps every raw property through its desirability curve.
///
/// All eight curves are always evaluated, independent of any weighting.
pub fn desirabilities(
    table: &DesirabilityTable,
    properties: &PropertyVector,
) -> Result<[f64; PROPERTY_COUNT], QedError> {
    let mut d = [0.0; PROPERTY_COUNT];
    for (property, value) in properties.iter() {
        if !value.is_finite() {
            return Err(QedError::NonFiniteProperty { property, value });
        }
        d[property.index()] = ads(value, table.get(property));
    }
    Ok(d)
}

/// Scores a property vector with the standard QED desirability table.
pub fn aggregate(properties: &PropertyVector, weights: &WeightVector) -> Result<f64, QedError> {
    aggregate_with(&DesirabilityTable::QED, properties, weights).map(|report| report.score)
}

/// Weighted geometric mean of the desirabilities: `exp(Σ wᵢ·ln dᵢ / Σ wᵢ)`.
///
/// Terms with a weight of exactly zero are left out of the log-sum, so their desirability
/// may be any value. A desirability that is not strictly positive (or NaN) under a non-zero
/// weight yields [`QedError::NonPositiveDesirability`].
pub fn aggregate_with(
    table: &DesirabilityTable,
    properties: &PropertyVector,
    weights: &WeightVector,
) -> Result<QedReport, QedError> {
    let desirabilities = desirabilities(table, properties)?;

    let mut log_sum = 0.0;
    for property in Property::ALL {
        let weight = weights.get(property);
        if weight == 0.0 {
            continue;
        }
        let value = desirabilities[property.index()];
        if value.is_nan() || value <= 0.0 {
            return Err(QedError::NonPositiveDesirability { property, value });
        }
        log_sum += weight * value.ln();
    }

    let score = (log_sum / weights.sum()).exp();
    trace!(score, "Aggregated desirabilities {:?}", desirabilities);

    Ok(QedReport {
        score,
        properties: *properties,
        desirabilities,
    })
}
