use crate::core::io::table::PropertyRecord;
use crate::core::models::report::QedReport;
use crate::engine::error::QedError;
use crate::engine::profile::ScoringProfile;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores every record under `profile`.
///
/// Returns one result per record, in input order. A record that fails to score does not
/// affect the others.
#[instrument(skip_all, name = "batch_scoring", fields(records = records.len()))]
pub fn score_records(
    records: &[PropertyRecord],
    profile: &ScoringProfile,
    reporter: &ProgressReporter,
) -> Vec<Result<QedReport, QedError>> {
    reporter.report(Progress::BatchStart {
        total_records: records.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = records.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = records.par_iter().enumerate();

    let results: Vec<Result<QedReport, QedError>> = iterator
        .map(|(index, record)| {
            let result = profile.score(&record.properties);
            match &result {
                Ok(_) => reporter.report(Progress::RecordScored),
                Err(e) => {
                    warn!(index, id = record.id.as_deref(), "Failed to score record: {}", e);
                    reporter.report(Progress::RecordFailed {
                        index,
                        message: e.to_string(),
                    });
                }
            }
            result
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    let scored = results.len() - failed;
    info!(scored, failed, "Batch scoring finished.");
    reporter.report(Progress::BatchFinish { scored, failed });

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::desirability::params::{DesirabilityParams, DesirabilityTable};
    use crate::core::models::properties::{Property, PropertyVector};
    use crate::core::models::weights::WeightPreset;
    use crate::engine::profile::ScoringProfileBuilder;
    use std::sync::Mutex;

    fn record(id: &str, values: [f64; 8]) -> PropertyRecord {
        PropertyRecord {
            id: Some(id.to_string()),
            properties: PropertyVector::new(values),
        }
    }

    fn records() -> Vec<PropertyRecord> {
        vec![
            record("famotidine", [337.453, -0.5598, 6.0, 5.0, 173.33, 8.0, 1.0, 3.0]),
            record("cimetidine", [252.347, 0.5725, 5.0, 3.0, 88.89, 7.0, 1.0, 5.0]),
            record("nan", [f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            record("indole", [301.394, 2.0042, 3.0, 5.0, 96.29, 9.0, 2.0, 4.0]),
        ]
    }

    #[test]
    fn results_follow_input_order() {
        let results = score_records(
            &records(),
            &ScoringProfile::default(),
            &ProgressReporter::new(),
        );
        assert_eq!(results.len(), 4);
        let expected = [Some(0.241), Some(0.217), None, Some(0.212)];
        for (result, expected) in results.iter().zip(expected) {
            match (result, expected) {
                (Ok(report), Some(score)) => assert!((report.score - score).abs() < 1e-3),
                (Err(QedError::NonFiniteProperty { property, .. }), None) => {
                    assert_eq!(*property, Property::Mw)
                }
                (other, _) => panic!("Unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn batch_matches_single_scoring() {
        let profile = ScoringProfile::from_preset(WeightPreset::Max);
        let records = records();
        let results = score_records(&records, &profile, &ProgressReporter::new());
        for (record, result) in records.iter().zip(&results) {
            match (profile.score(&record.properties), result) {
                (Ok(single), Ok(batch)) => assert_eq!(single, *batch),
                (Err(_), Err(_)) => {}
                other => panic!("Mismatch {:?}", other),
            }
        }
    }

    #[test]
    fn empty_batch_reports_zero_counts() {
        let events: Mutex<Vec<Progress>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        let results = score_records(&[], &ScoringProfile::default(), &reporter);
        assert!(results.is_empty());
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(matches!(
            events[0],
            Progress::BatchStart { total_records: 0 }
        ));
        assert!(matches!(
            events[1],
            Progress::BatchFinish {
                scored: 0,
                failed: 0
            }
        ));
    }

    #[test]
    fn progress_counts_scored_and_failed_records() {
        let events: Mutex<Vec<Progress>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        score_records(&records(), &ScoringProfile::default(), &reporter);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 6);
        let scored = events
            .iter()
            .filter(|e| matches!(e, Progress::RecordScored))
            .count();
        let failed: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Progress::RecordFailed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(scored, 3);
        assert_eq!(failed, vec![2]);
        assert!(matches!(
            events.last(),
            Some(Progress::BatchFinish {
                scored: 3,
                failed: 1
            })
        ));
    }

    #[test]
    fn profile_table_applies_to_every_record() {
        let flat = DesirabilityParams {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 1.0,
            f: 1.0,
            dmax: 4.0,
        };
        let mut table = DesirabilityTable::QED;
        for property in Property::ALL {
            table = table.with_row(property, flat).unwrap();
        }
        let profile = ScoringProfileBuilder::new()
            .preset(WeightPreset::Unit)
            .table(table)
            .build()
            .unwrap();

        let mut input = records();
        input.remove(2);
        for result in score_records(&input, &profile, &ProgressReporter::new()) {
            assert!((result.unwrap().score - 0.25).abs() < 1e-12);
        }
    }
}
