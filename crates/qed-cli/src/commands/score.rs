use crate::cli::ScoreArgs;
use crate::config::PartialScoringConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use qedpp::{
    core::io::table::{PropertyTable, write_reports},
    engine::progress::ProgressReporter,
    workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: ScoreArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialScoringConfig::from_file(path)?,
        None => PartialScoringConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading property table from {:?}", &config.input_path);
    let records =
        PropertyTable::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Scoring {} record(s)...", records.len());
    let results = workflows::batch::score_records(&records, &config.profile, &reporter);

    match &config.output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_reports(&mut writer, &records, &results, config.details)?;
            writer.flush()?;
            info!("Scores written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            write_reports(stdout.lock(), &records, &results, config.details)?;
        }
    }

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!("{} of {} record(s) failed to score.", failed, records.len());
        return Err(CliError::Scoring {
            failed,
            total: records.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const TABLE: &str = "\
id,MW,ALOGP,HBA,HBD,PSA,ROTB,AROM,ALERTS
famotidine,337.453,-0.5598,6,5,173.33,8,1,3
cimetidine,252.347,0.5725,5,3,88.89,7,1,5
";

    fn score_args(input: &Path, output: &Path, extra: &[&str]) -> ScoreArgs {
        let mut argv = vec![
            "qed".to_string(),
            "score".to_string(),
            "-i".to_string(),
            input.to_str().unwrap().to_string(),
            "-o".to_string(),
            output.to_str().unwrap().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(argv).command {
            Commands::Score(args) => args,
            _ => panic!("Expected 'score' subcommand"),
        }
    }

    #[test]
    fn run_writes_one_row_per_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, TABLE).unwrap();

        run(score_args(&input, &output, &[])).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,qed,error");

        let famotidine: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(famotidine[0], "famotidine");
        let score: f64 = famotidine[1].parse().unwrap();
        assert!((score - 0.241).abs() < 1e-3);
        assert_eq!(famotidine[2], "");
    }

    #[test]
    fn run_with_details_writes_desirabilities() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, TABLE).unwrap();

        run(score_args(&input, &output, &["--details", "-w", "max"])).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("id,qed,d_MW,"));
        assert!(header.ends_with(",d_ALERTS,error"));
    }

    #[test]
    fn run_reports_failed_records_but_writes_all_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, format!("{}broken,NaN,0,0,0,0,0,0,0\n", TABLE)).unwrap();

        let result = run(score_args(&input, &output, &[]));
        assert!(matches!(
            result,
            Err(CliError::Scoring {
                failed: 1,
                total: 3
            })
        ));

        let text = fs::read_to_string(&output).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("broken,,"));
        assert!(last.contains("not finite"));
    }

    #[test]
    fn run_fails_for_malformed_table() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "id,MW\nx,1\n").unwrap();

        let result = run(score_args(&input, &output, &[]));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
        assert!(!output.exists());
    }
}
