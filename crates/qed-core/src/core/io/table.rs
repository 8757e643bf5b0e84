use crate::core::models::properties::{PROPERTY_COUNT, Property, PropertyVector};
use crate::core::models::report::QedReport;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const ID_COLUMN: &str = "id";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column for property {0}")]
    MissingColumn(Property),
    #[error("Column '{header}' duplicates property {property}")]
    DuplicateColumn { property: Property, header: String },
    #[error("Invalid value for {property} on line {line}: '{value}'")]
    InvalidValue {
        line: u64,
        property: Property,
        value: String,
    },
}

/// One row of a property table.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: Option<String>,
    pub properties: PropertyVector,
}

pub struct PropertyTable;

impl PropertyTable {
    /// Reads every record of a CSV property table.
    ///
    /// Headers are matched case-insensitively against property labels and aliases;
    /// columns that name no property (other than `id`) are ignored.
    pub fn read_from(reader: impl Read) -> Result<Vec<PropertyRecord>, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut id_column = None;
        let mut columns: [Option<usize>; PROPERTY_COUNT] = [None; PROPERTY_COUNT];

        for (i, header) in headers.iter().enumerate() {
            if header.eq_ignore_ascii_case(ID_COLUMN) {
                id_column = Some(i);
                continue;
            }
            match header.parse::<Property>() {
                Ok(property) => {
                    let slot = &mut columns[property.index()];
                    if slot.is_some() {
                        return Err(TableError::DuplicateColumn {
                            property,
                            header: header.to_string(),
                        });
                    }
                    *slot = Some(i);
                }
                Err(_) => debug!("Ignoring column '{}'", header),
            }
        }

        let mut indices = [0usize; PROPERTY_COUNT];
        for property in Property::ALL {
            indices[property.index()] =
                columns[property.index()].ok_or(TableError::MissingColumn(property))?;
        }

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |p| p.line());

            let mut values = [0.0; PROPERTY_COUNT];
            for property in Property::ALL {
                let cell = row.get(indices[property.index()]).unwrap_or("");
                values[property.index()] =
                    cell.parse::<f64>()
                        .map_err(|_| TableError::InvalidValue {
                            line,
                            property,
                            value: cell.to_string(),
                        })?;
            }

            let id = id_column
                .and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            records.push(PropertyRecord {
                id,
                properties: PropertyVector::new(values),
            });
        }

        debug!("Read {} property records.", records.len());
        Ok(records)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::read_from(BufReader::new(file))
    }
}

/// Writes one output row per record: `id`, `qed`, optionally a `d_<LABEL>` column per
/// desirability, and `error`.
///
/// `records` and `results` are paired by position. A failed record gets empty score and
/// desirability cells and its error message in the last column. Records without an id are
/// numbered from 1 in input order.
pub fn write_reports<W: Write, E: Display>(
    writer: W,
    records: &[PropertyRecord],
    results: &[Result<QedReport, E>],
    details: bool,
) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![ID_COLUMN.to_string(), "qed".to_string()];
    if details {
        header.extend(Property::ALL.iter().map(|p| format!("d_{}", p.label())));
    }
    header.push("error".to_string());
    csv_writer.write_record(&header)?;

    for (i, (record, result)) in records.iter().zip(results).enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(record.id.clone().unwrap_or_else(|| (i + 1).to_string()));
        match result {
            Ok(report) => {
                row.push(report.score.to_string());
                if details {
                    row.extend(report.desirabilities.iter().map(|d| d.to_string()));
                }
                row.push(String::new());
            }
            Err(e) => {
                row.push(String::new());
                if details {
                    row.extend(std::iter::repeat_n(String::new(), PROPERTY_COUNT));
                }
                row.push(e.to_string());
            }
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush().map_err(|e| TableError::Csv(e.into()))?;
    Ok(())
}
