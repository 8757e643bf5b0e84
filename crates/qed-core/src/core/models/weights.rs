use super::properties::{PROPERTY_COUNT, Property};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MEAN_WEIGHTS: [f64; PROPERTY_COUNT] = [0.66, 0.46, 0.05, 0.61, 0.06, 0.65, 0.48, 0.95];
const MAX_WEIGHTS: [f64; PROPERTY_COUNT] = [0.50, 0.25, 0.00, 0.50, 0.00, 0.50, 0.25, 1.00];
const UNIT_WEIGHTS: [f64; PROPERTY_COUNT] = [1.0; PROPERTY_COUNT];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeightError {
    #[error("Weight for {property} must be finite and non-negative, got {value}")]
    InvalidWeight { property: Property, value: f64 },

    #[error("Sum of weights must be strictly positive, got {0}")]
    NonPositiveSum(f64),

    #[error("Expected exactly 8 weights, got {0}")]
    WrongLength(usize),
}

/// Relative importance of each property in the weighted geometric mean.
///
/// Invariants: every weight is finite and `>= 0`, and the sum is `> 0`. A zero weight
/// removes the property from the product but its desirability is still evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    weights: [f64; PROPERTY_COUNT],
    sum: f64,
}

impl WeightVector {
    pub fn new(weights: [f64; PROPERTY_COUNT]) -> Result<Self, WeightError> {
        for property in Property::ALL {
            let value = weights[property.index()];
            if !value.is_finite() || value < 0.0 {
                return Err(WeightError::InvalidWeight { property, value });
            }
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(WeightError::NonPositiveSum(sum));
        }
        Ok(Self { weights, sum })
    }

    #[inline]
    pub fn get(&self, property: Property) -> f64 {
        self.weights[property.index()]
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn as_array(&self) -> &[f64; PROPERTY_COUNT] {
        &self.weights
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        WeightPreset::default().weights()
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = WeightError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let weights: [f64; PROPERTY_COUNT] = values
            .try_into()
            .map_err(|v: Vec<f64>| WeightError::WrongLength(v.len()))?;
        Self::new(weights)
    }
}

/// The three published weighting schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightPreset {
    /// Average of the fitted weights; the conventional QED.
    #[default]
    Mean,
    /// Weights maximising information content; HBA and PSA receive zero weight.
    Max,
    /// All properties weighted equally (unweighted geometric mean).
    Unit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown weight preset '{0}'. Expected one of 'mean', 'default', 'max', 'none', 'unit'.")]
pub struct ParseWeightPresetError(pub String);

impl WeightPreset {
    pub fn weights(self) -> WeightVector {
        let weights = match self {
            WeightPreset::Mean => MEAN_WEIGHTS,
            WeightPreset::Max => MAX_WEIGHTS,
            WeightPreset::Unit => UNIT_WEIGHTS,
        };
        let sum = weights.iter().sum();
        WeightVector { weights, sum }
    }
}

impl FromStr for WeightPreset {
    type Err = ParseWeightPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" | "default" => Ok(WeightPreset::Mean),
            "max" => Ok(WeightPreset::Max),
            "none" | "unit" => Ok(WeightPreset::Unit),
            _ => Err(ParseWeightPresetError(s.to_string())),
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WeightPreset::Mean => "mean",
                WeightPreset::Max => "max",
                WeightPreset::Unit => "none",
            }
        )
    }
}
