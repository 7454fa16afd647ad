use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::Field;

// ---------------------------------------------------------------------------
// Load-level failures (fatal to startup)
// ---------------------------------------------------------------------------

/// The dataset could not be read at all. No charts are drawn when this occurs.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open dataset {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

impl DataLoadError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Row-level problems (reported, never fatal)
// ---------------------------------------------------------------------------

/// What was wrong with a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// The cell was empty or absent.
    Absent,
    /// The cell held text that does not parse as a number.
    NotNumeric(String),
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldProblem::Absent => write!(f, "is absent"),
            FieldProblem::NotNumeric(raw) => write!(f, "'{raw}' is not a number"),
        }
    }
}

/// A cell that could not be coerced. The affected value becomes NaN (or an
/// empty string for `location`) and the row is still kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: field '{field}' {problem}")]
pub struct MissingFieldError {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    pub field: Field,
    pub problem: FieldProblem,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown country '{0}'")]
    UnknownCountry(String),
}
