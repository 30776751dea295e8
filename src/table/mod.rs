// Tabular input — reading one column out of an uploaded CSV file.
//
// Cells keep a typed value (the way dataframe readers infer column types) so
// the batch endpoint can echo back the original cell: a numeric column comes
// back as JSON numbers, an empty cell as null.

pub mod reader;

use std::borrow::Cow;

use serde::Serialize;

/// The column every uploaded CSV must have; its cells are what gets scored.
pub const TEXT_COLUMN: &str = "text";

/// A single cell of the scored column, after type inference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty cell or a recognized missing-value marker ("NA", "null", ...)
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// The string that gets scored for this cell.
    ///
    /// Missing cells become the empty string, which the analyzer scores as
    /// neutral. Integral floats keep a trailing ".0" so "2.0" doesn't turn
    /// into "2".
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(true) => Cow::Borrowed("True"),
            CellValue::Bool(false) => Cow::Borrowed("False"),
            CellValue::Int(n) => Cow::Owned(n.to_string()),
            CellValue::Float(f) if f.fract() == 0.0 && f.abs() < 1e16 => {
                Cow::Owned(format!("{f:.1}"))
            }
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

/// Why a CSV upload couldn't be turned into a column of cells.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The header row has no column with the required name. A client error.
    #[error("CSV must have a '{0}' column.")]
    MissingColumn(String),
    /// The file has no header row at all.
    #[error("No columns to parse from file")]
    Empty,
    /// Invalid UTF-8, a row wider than the header, or another parse failure.
    #[error("{0}")]
    Malformed(String),
}

impl TableError {
    /// True when the problem is the shape of the user's file rather than
    /// its encoding or syntax.
    pub fn is_client_error(&self) -> bool {
        matches!(self, TableError::MissingColumn(_))
    }
}
