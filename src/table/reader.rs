// CSV column reader.
//
// The first record is the header. Blank lines are skipped. Rows shorter than
// the header are padded with missing cells; rows longer than the header are
// rejected, since there's no way to tell which field was meant to go where.
//
// Column type inference runs over the non-missing cells of the requested
// column only: all booleans → Bool, all integers → Int, all finite floats →
// Float, anything else → Text.

use csv::ReaderBuilder;
use tracing::debug;

use super::{CellValue, TableError};

/// Cell contents treated as a missing value, matching common dataframe defaults.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#NA", "-NaN", "-nan", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a",
    "nan", "null",
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Bool,
    Int,
    Float,
    Text,
}

/// Read every value of `column` from CSV `bytes`, in row order.
pub fn read_column(bytes: &[u8], column: &str) -> Result<Vec<CellValue>, TableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| TableError::Malformed(e.to_string()))?
        .clone();

    if headers.is_empty() {
        return Err(TableError::Empty);
    }

    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| TableError::MissingColumn(column.to_string()))?;
    let width = headers.len();

    let mut raw: Vec<Option<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| TableError::Malformed(e.to_string()))?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(TableError::Malformed(format!(
                "Error tokenizing data. Expected {width} fields in line {line}, saw {}",
                record.len()
            )));
        }
        let cell = record
            .get(index)
            .filter(|value| !MISSING_MARKERS.contains(value))
            .map(str::to_string);
        raw.push(cell);
    }

    let kind = infer_kind(raw.iter().flatten().map(String::as_str));
    debug!(rows = raw.len(), kind = ?kind, column, "Read CSV column");

    Ok(raw.into_iter().map(|cell| to_cell(cell, kind)).collect())
}

fn infer_kind<'a>(mut values: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
    if values.clone().next().is_none() {
        return ColumnKind::Text;
    }
    if values.clone().all(|v| parse_bool(v).is_some()) {
        ColumnKind::Bool
    } else if values.clone().all(|v| v.parse::<i64>().is_ok()) {
        ColumnKind::Int
    } else if values.all(|v| parse_finite_float(v).is_some()) {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}

fn to_cell(cell: Option<String>, kind: ColumnKind) -> CellValue {
    let Some(value) = cell else {
        return CellValue::Null;
    };
    // infer_kind has already checked that every value parses for its kind;
    // the Text fallbacks below are unreachable in practice.
    match kind {
        ColumnKind::Bool => parse_bool(&value)
            .map(CellValue::Bool)
            .unwrap_or(CellValue::Text(value)),
        ColumnKind::Int => value
            .parse()
            .map(CellValue::Int)
            .unwrap_or(CellValue::Text(value)),
        ColumnKind::Float => parse_finite_float(&value)
            .map(CellValue::Float)
            .unwrap_or(CellValue::Text(value)),
        ColumnKind::Text => CellValue::Text(value),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_finite_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|f| f.is_finite())
}
