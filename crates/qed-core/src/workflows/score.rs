use crate::core::models::properties::PropertyVector;
use crate::core::models::weights::{WeightPreset, WeightVector};
use crate::engine::aggregate::aggregate;
use crate::engine::error::QedError;
use crate::engine::extract::PropertyExtractor;
use tracing::instrument;

/// Computes the QED score of a molecule under explicit weights.
///
/// When `properties` is supplied it is used as-is and the extractor is never consulted.
/// Otherwise the properties are extracted from `molecule`, which must then be present.
///
/// # Errors
///
/// Returns [`QedError::MissingMolecule`] if neither a molecule nor properties are given
/// (checked before the extractor is touched), and propagates extraction and aggregation
/// failures.
#[instrument(skip_all, name = "qed")]
pub fn qed<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
    weights: &WeightVector,
    properties: Option<&PropertyVector>,
) -> Result<f64, QedError> {
    let properties = match properties {
        Some(p) => *p,
        None => extractor.extract(molecule.ok_or(QedError::MissingMolecule)?)?,
    };
    aggregate(&properties, weights)
}

fn with_preset<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
    preset: WeightPreset,
) -> Result<f64, QedError> {
    let molecule = molecule.ok_or(QedError::MissingMolecule)?;
    qed(extractor, Some(molecule), &preset.weights(), None)
}

/// QED with the information-maximising weights; HBA and PSA do not contribute.
pub fn weights_max<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
) -> Result<f64, QedError> {
    with_preset(extractor, molecule, WeightPreset::Max)
}

/// QED with the mean fitted weights.
pub fn weights_mean<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
) -> Result<f64, QedError> {
    with_preset(extractor, molecule, WeightPreset::Mean)
}

/// Unweighted QED: the plain geometric mean of the eight desirabilities.
pub fn weights_none<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
) -> Result<f64, QedError> {
    with_preset(extractor, molecule, WeightPreset::Unit)
}

/// The conventional QED, identical to [`weights_mean`].
pub fn default<X: PropertyExtractor>(
    extractor: &X,
    molecule: Option<&X::Molecule>,
) -> Result<f64, QedError> {
    weights_mean(extractor, molecule)
}
