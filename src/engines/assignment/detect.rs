use crate::error::{AirschedError, Result};
use polars::prelude::*;

const PROGRAM_KEYWORDS: [&str; 3] = ["program", "name", "title"];
const TIME_KEYWORDS: [&str; 4] = ["hour", "time", "slot", "schedule"];

/// Pick the column the program list is read from.
///
/// Precedence: first column whose lowercased name contains a program keyword,
/// then the first textual (non-numeric) column, then the table's first column.
/// Total for any table with at least one column.
pub fn detect_program_column(df: &DataFrame) -> Result<String> {
    let columns = df.get_column_names();
    if columns.is_empty() {
        return Err(AirschedError::InvalidInput(
            "Table has no columns".to_string(),
        ));
    }

    for col in &columns {
        let lower = col.to_lowercase();
        if PROGRAM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return Ok(col.to_string());
        }
    }

    for col in &columns {
        let series = df.column(col)?;
        if !matches!(
            series.dtype(),
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::UInt64
                | DataType::UInt32
        ) {
            return Ok(col.to_string());
        }
    }

    Ok(columns[0].to_string())
}

/// Columns whose lowercased name contains a time keyword, in declared order.
pub fn time_related_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .filter(|col| {
            let lower = col.to_lowercase();
            TIME_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(|col| col.to_string())
        .collect()
}
