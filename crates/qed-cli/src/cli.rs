use clap::{Args, Parser, Subcommand};
use qedpp::core::catalog::Catalog;
use qedpp::core::models::weights::WeightPreset;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "QED++ Developers",
    version,
    about = "QED++ CLI - Quantitative Estimate of Drug-likeness scoring for tables of precomputed molecular properties.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for batch scoring.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every row of a CSV table of precomputed molecular properties.
    Score(ScoreArgs),
    /// Print one of the built-in SMARTS pattern catalogs.
    Catalog(CatalogArgs),
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    // --- Core Arguments ---
    /// Path to the input CSV table (columns: id, MW, ALOGP, HBA, HBD, PSA, ROTB, AROM, ALERTS).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV table. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Scoring Overrides ---
    /// Weighting scheme: 'mean' (default), 'max' or 'none'.
    #[arg(short, long, value_name = "PRESET")]
    pub weights: Option<WeightPreset>,

    /// Override the desirability parameter table with a TOML file.
    #[arg(long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,

    /// Add one desirability column per property to the output.
    #[arg(long)]
    pub details: bool,

    /// Set a specific configuration value, overriding the config file and flags.
    /// Can be used multiple times. Example: -S weights.preset=max
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Which catalog to print: 'acceptors', 'alerts' or 'aliphatic-rings'.
    #[arg(required = true, value_name = "CATALOG")]
    pub catalog: Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_arguments_parse() {
        let cli = Cli::parse_from([
            "qed", "-vv", "score", "-i", "in.csv", "-o", "out.csv", "-w", "max", "--details",
            "-S", "output.details=false",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.input, PathBuf::from("in.csv"));
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert_eq!(args.weights, Some(WeightPreset::Max));
                assert!(args.details);
                assert_eq!(args.set_values, vec!["output.details=false".to_string()]);
            }
            other => panic!("Expected 'score' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn unknown_weight_preset_is_rejected() {
        let result = Cli::try_parse_from(["qed", "score", "-i", "in.csv", "-w", "median"]);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_argument_parses() {
        let cli = Cli::parse_from(["qed", "catalog", "alerts"]);
        assert!(matches!(
            cli.command,
            Commands::Catalog(CatalogArgs {
                catalog: Catalog::Alerts
            })
        ));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["qed", "-q", "-v", "catalog", "acceptors"]);
        assert!(result.is_err());
    }
}
