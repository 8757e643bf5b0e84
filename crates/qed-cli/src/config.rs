use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use qedpp::core::desirability::params::DesirabilityTable;
use qedpp::core::models::weights::{WeightPreset, WeightVector};
use qedpp::engine::error::QedError;
use qedpp::engine::profile::{ScoringProfile, ScoringProfileBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialWeightsConfig {
    preset: Option<String>,
    custom: Option<Vec<f64>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDesirabilityConfig {
    #[serde(rename = "parameters-path")]
    parameters_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    details: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScoringConfig {
    weights: Option<PartialWeightsConfig>,
    desirability: Option<PartialDesirabilityConfig>,
    output: Option<PartialOutputConfig>,
}

/// Everything the `score` command needs once file, flags, and `--set` values are merged.
#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub details: bool,
    pub profile: ScoringProfile,
}

impl PartialScoringConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Merges this file configuration with the command line.
    ///
    /// Precedence, highest first: `--set` values, dedicated flags, the file, built-in
    /// defaults (mean weights, the published desirability table, no details).
    pub fn merge_with_cli(mut self, args: &ScoreArgs) -> Result<AppConfig> {
        self.apply_cli_args(args);
        self.apply_set_values(&args.set_values)?;

        let weights_config = self.weights.take().unwrap_or_default();
        let weights = Self::resolve_weights(weights_config)?;

        let mut builder = ScoringProfileBuilder::new().weights(weights);
        if let Some(path) = self.desirability.take().and_then(|d| d.parameters_path) {
            debug!("Loading desirability parameters from {:?}", path);
            let table = DesirabilityTable::load(&path).map_err(QedError::from)?;
            builder = builder.table(table);
        }

        let details = self
            .output
            .take()
            .and_then(|o| o.details)
            .unwrap_or(false);

        let profile = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            details,
            profile,
        })
    }

    fn resolve_weights(partial: PartialWeightsConfig) -> Result<WeightVector> {
        match (partial.preset, partial.custom) {
            (Some(_), Some(_)) => Err(CliError::Config(
                "`weights.preset` and `weights.custom` are mutually exclusive".to_string(),
            )),
            (None, Some(custom)) => WeightVector::try_from(custom)
                .map_err(|e| CliError::Config(format!("Invalid `weights.custom`: {}", e))),
            (Some(name), None) => name
                .parse::<WeightPreset>()
                .map(WeightPreset::weights)
                .map_err(|e| CliError::Config(e.to_string())),
            (None, None) => Ok(WeightPreset::default().weights()),
        }
    }

    fn apply_cli_args(&mut self, args: &ScoreArgs) {
        if let Some(preset) = args.weights {
            let weights = self.weights.get_or_insert_with(Default::default);
            weights.preset = Some(preset.to_string());
            weights.custom = None;
        }
        if let Some(path) = &args.parameters {
            self.desirability
                .get_or_insert_with(Default::default)
                .parameters_path = Some(path.clone());
        }
        if args.details {
            self.output.get_or_insert_with(Default::default).details = Some(true);
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "weights.preset" => {
                    let weights = self.weights.get_or_insert_with(Default::default);
                    weights.preset = Some(value_str.to_string());
                    weights.custom = None;
                }
                "weights.custom" => {
                    let custom = value_str
                        .split(',')
                        .map(|v| v.trim().parse::<f64>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|_| {
                            CliError::Config(format!(
                                "Invalid float list for {}: {}",
                                key, value_str
                            ))
                        })?;
                    let weights = self.weights.get_or_insert_with(Default::default);
                    weights.custom = Some(custom);
                    weights.preset = None;
                }
                "desirability.parameters-path" => {
                    self.desirability
                        .get_or_insert_with(Default::default)
                        .parameters_path = Some(PathBuf::from(value_str));
                }
                "output.details" => {
                    self.output.get_or_insert_with(Default::default).details =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid boolean value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
