use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::model::{Dataset, Field, Record};
use crate::error::{DataLoadError, FieldProblem, MissingFieldError};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the demographic dataset from a CSV file with a header row.
///
/// Required columns: `location`, `time`, `pop_mlns`, `fertility_rate`,
/// `life_expectancy`. Extra columns are ignored.
pub fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|e| DataLoadError::open(path, e))?;
    let dataset = load_reader(file)?;
    if dataset.is_empty() {
        log::warn!("{} has a header but no data rows", path.display());
    }
    log::info!(
        "Loaded {} records from {} ({} cell issues)",
        dataset.len(),
        path.display(),
        dataset.issues.len()
    );
    Ok(dataset)
}

/// Parse CSV text from any reader.
///
/// A missing header column fails the whole load. A bad cell only marks that
/// value as NaN and is recorded in [`Dataset::issues`].
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for field in Field::ALL {
        let column = field.column_name();
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    let mut issues = Vec::new();

    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        let mut row = RowParser {
            row: idx + 1,
            issues: &mut issues,
        };
        records.push(Record {
            location: row.text(raw.location, Field::Location),
            time: row.number(raw.time, Field::Time),
            pop_mlns: row.number(raw.pop_mlns, Field::PopMlns),
            fertility_rate: row.number(raw.fertility_rate, Field::FertilityRate),
            life_expectancy: row.number(raw.life_expectancy, Field::LifeExpectancy),
        });
    }

    for issue in &issues {
        log::warn!("{issue}");
    }

    Ok(Dataset { records, issues })
}

// ---------------------------------------------------------------------------
// Row coercion
// ---------------------------------------------------------------------------

/// Cells are read as text first so that one bad value does not reject the row.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    pop_mlns: Option<String>,
    #[serde(default)]
    fertility_rate: Option<String>,
    #[serde(default)]
    life_expectancy: Option<String>,
}

struct RowParser<'a> {
    row: usize,
    issues: &'a mut Vec<MissingFieldError>,
}

impl RowParser<'_> {
    fn report(&mut self, field: Field, problem: FieldProblem) {
        self.issues.push(MissingFieldError {
            row: self.row,
            field,
            problem,
        });
    }

    fn text(&mut self, cell: Option<String>, field: Field) -> String {
        match cell {
            Some(s) if !s.is_empty() => s,
            _ => {
                self.report(field, FieldProblem::Absent);
                String::new()
            }
        }
    }

    fn number(&mut self, cell: Option<String>, field: Field) -> f64 {
        let Some(raw) = cell.filter(|s| !s.is_empty()) else {
            self.report(field, FieldProblem::Absent);
            return f64::NAN;
        };
        match raw.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                self.report(field, FieldProblem::NotNumeric(raw));
                f64::NAN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "location,time,pop_mlns,fertility_rate,life_expectancy\n";

    #[test]
    fn parses_rows_in_file_order() {
        let rows = "A,2000,10,2.1,71.5\nA,2001,12,2.0,71.9\nB,2000,5,3.4,60.2\n";
        let text = format!("{HEADER}{rows}");
        let ds = load_reader(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 3);
        assert!(ds.issues.is_empty());
        assert_eq!(ds.records[1].location, "A");
        assert_eq!(ds.records[1].time, 2001.0);
        assert_eq!(ds.records[2].pop_mlns, 5.0);
        assert_eq!(ds.records[2].life_expectancy, 60.2);
    }

    #[test]
    fn extra_columns_and_column_order_are_ignored() {
        let text = "code,life_expectancy,location,pop_mlns,time,fertility_rate\n\
                    PE,74.0,Peru,31.0,2015,2.4\n";
        let ds = load_reader(text.as_bytes()).unwrap();
        let r = &ds.records[0];
        assert_eq!(r.location, "Peru");
        assert_eq!(r.time, 2015.0);
        assert_eq!(r.fertility_rate, 2.4);
    }

    #[test]
    fn missing_column_fails_the_load() {
        let text = "location,time,pop_mlns,life_expectancy\nA,2000,10,70\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        match err {
            DataLoadError::MissingColumn { column } => assert_eq!(column, "fertility_rate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undecodable_row_fails_the_load() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"A,2000,1,1,1\n\xff,2000,1,1,1\n");
        let err = load_reader(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn bad_cells_become_nan_and_are_reported() {
        let text = format!("{HEADER}A,2000,n/a,2.1,71.5\n,2001,12,,71.9\nB,2000,5\n");
        let ds = load_reader(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 3);
        assert!(ds.records[0].pop_mlns.is_nan());
        assert_eq!(ds.records[1].location, "");
        assert!(ds.records[1].fertility_rate.is_nan());
        assert!(ds.records[2].life_expectancy.is_nan());

        assert_eq!(
            ds.issues[0],
            MissingFieldError {
                row: 1,
                field: Field::PopMlns,
                problem: FieldProblem::NotNumeric("n/a".into()),
            }
        );
        assert_eq!(ds.issues[1].field, Field::Location);
        assert_eq!(ds.issues[1].problem, FieldProblem::Absent);
        let row3 = ds.issues.iter().filter(|i| i.row == 3);
        let row3: Vec<Field> = row3.map(|i| i.field).collect();
        assert_eq!(row3, vec![Field::FertilityRate, Field::LifeExpectancy]);
    }

    #[test]
    fn header_only_file_is_empty_not_an_error() {
        let ds = load_reader(HEADER.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}A,2000,10,2.1,71.5\n").unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn load_file_reports_unreachable_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Open { .. }));
    }
}
