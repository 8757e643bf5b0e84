use crate::core::desirability::params::ParamLoadError;
use crate::core::models::properties::Property;
use crate::core::models::weights::WeightError;
use thiserror::Error;

/// Boxed error raised by a cheminformatics toolkit behind [`ChemToolkit`](super::extract::ChemToolkit).
pub type ToolkitError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum QedError {
    #[error("A molecule is required when no precomputed properties are supplied")]
    MissingMolecule,

    #[error("Raw value for {property} is not finite: {value}")]
    NonFiniteProperty { property: Property, value: f64 },

    #[error(
        "Desirability of {property} is {value}, which has no logarithm; the score is undefined"
    )]
    NonPositiveDesirability { property: Property, value: f64 },

    #[error("Invalid weights: {source}")]
    InvalidWeights {
        #[from]
        source: WeightError,
    },

    #[error("Desirability parameters could not be loaded: {source}")]
    Parameters {
        #[from]
        source: ParamLoadError,
    },

    #[error("Failed to compile SMARTS pattern '{smarts}': {source}")]
    PatternCompilation {
        smarts: &'static str,
        source: ToolkitError,
    },

    #[error("Property extraction failed: {0}")]
    Toolkit(ToolkitError),
}
