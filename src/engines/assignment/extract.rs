use crate::error::{AirschedError, Result};
use polars::prelude::*;
use std::collections::HashSet;

/// Read program identities from the named column.
///
/// Cells are read top-to-bottom, stringified, trimmed of surrounding
/// whitespace; nulls and empty cells are dropped and duplicates removed with
/// first occurrence winning. An empty result is valid and flows through to an
/// empty schedule.
pub fn extract_programs(df: &DataFrame, column_name: &str) -> Result<Vec<String>> {
    let series = df.column(column_name).map_err(|_| {
        AirschedError::InvalidInput(format!("Column '{}' not found in table", column_name))
    })?;

    let as_str = series.cast(&DataType::String)?;
    let values = as_str.str()?;

    let mut seen = HashSet::new();
    let mut programs = Vec::new();
    for value in values.into_iter().flatten() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            programs.push(trimmed.to_string());
        }
    }

    Ok(programs)
}
