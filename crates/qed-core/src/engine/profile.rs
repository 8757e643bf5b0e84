use crate::core::desirability::params::DesirabilityTable;
use crate::core::models::properties::PropertyVector;
use crate::core::models::report::QedReport;
use crate::core::models::weights::{WeightPreset, WeightVector};
use crate::engine::aggregate::aggregate_with;
use crate::engine::error::QedError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// The weights and desirability curves used to turn properties into a score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringProfile {
    pub weights: WeightVector,
    pub table: DesirabilityTable,
}

impl ScoringProfile {
    pub fn from_preset(preset: WeightPreset) -> Self {
        Self {
            weights: preset.weights(),
            table: DesirabilityTable::QED,
        }
    }

    pub fn score(&self, properties: &PropertyVector) -> Result<QedReport, QedError> {
        aggregate_with(&self.table, properties, &self.weights)
    }
}

#[derive(Default)]
pub struct ScoringProfileBuilder {
    weights: Option<WeightVector>,
    table: Option<DesirabilityTable>,
}

impl ScoringProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(mut self, weights: WeightVector) -> Self {
        self.weights = Some(weights);
        self
    }
    pub fn preset(mut self, preset: WeightPreset) -> Self {
        self.weights = Some(preset.weights());
        self
    }
    pub fn table(mut self, table: DesirabilityTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn build(self) -> Result<ScoringProfile, ConfigError> {
        Ok(ScoringProfile {
            weights: self
                .weights
                .ok_or(ConfigError::MissingParameter("weights"))?,
            table: self.table.unwrap_or(DesirabilityTable::QED),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::desirability::params::DesirabilityParams;
    use crate::core::models::properties::Property;

    #[test]
    fn builder_requires_weights() {
        let result = ScoringProfileBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("weights")));
    }

    #[test]
    fn builder_defaults_to_the_qed_table() {
        let profile = ScoringProfileBuilder::new()
            .preset(WeightPreset::Max)
            .build()
            .unwrap();
        assert_eq!(profile.table, DesirabilityTable::QED);
        assert_eq!(profile.weights, WeightPreset::Max.weights());
    }

    #[test]
    fn later_weight_settings_win() {
        let custom = WeightVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let profile = ScoringProfileBuilder::new()
            .preset(WeightPreset::Unit)
            .weights(custom)
            .build()
            .unwrap();
        assert_eq!(profile.weights, custom);
    }

    #[test]
    fn default_profile_is_mean_weighted_qed() {
        assert_eq!(
            ScoringProfile::default(),
            ScoringProfile::from_preset(WeightPreset::Mean)
        );
    }

    #[test]
    fn score_uses_the_profile_table() {
        let flat = DesirabilityParams {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 1.0,
            f: 1.0,
            dmax: 2.0,
        };
        let mut table = DesirabilityTable::QED;
        for property in Property::ALL {
            table = table.with_row(property, flat).unwrap();
        }
        let profile = ScoringProfileBuilder::new()
            .preset(WeightPreset::Mean)
            .table(table)
            .build()
            .unwrap();

        let report = profile
            .score(&PropertyVector::new([100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]))
            .unwrap();
        assert!((report.score - 0.5).abs() < 1e-12);
    }
}
