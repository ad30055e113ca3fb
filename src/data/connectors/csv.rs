use super::{
    types::{TableMetadata, TablePreview},
    validator::TableValidator,
};
use crate::engines::assignment::detect;
use crate::error::{AirschedError, Result};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| AirschedError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate a program table.
    ///
    /// A failed load or an unusable shape aborts the run; null cells are
    /// reported but not fatal (they are dropped during program extraction).
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = Self::load(&path)?;

        TableValidator::validate_shape(&df)?;

        let null_report = TableValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(df)
    }

    /// Create metadata for a loaded table
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<TableMetadata> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let program_column = detect::detect_program_column(df).ok();
        let slot_columns = detect::time_related_columns(df);

        Ok(TableMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            program_column,
            slot_columns,
        })
    }

    /// Create a preview of the data for terminal display
    pub fn create_preview<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<TablePreview> {
        let metadata = Self::create_metadata(&path, df)?;

        let num_preview_rows = 10.min(df.height());
        let mut first_rows = Vec::new();

        for i in 0..num_preview_rows {
            let mut row = Vec::new();
            for col_name in df.get_column_names() {
                let series = df.column(col_name)?;
                let value = match series.dtype() {
                    DataType::Float64 | DataType::Float32 => {
                        let s_f64 = series.cast(&DataType::Float64)?;
                        let f64_series = s_f64.f64()?;
                        f64_series
                            .get(i)
                            .map(|v| format!("{:.4}", v))
                            .unwrap_or_else(|| "null".to_string())
                    }
                    DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
                        let s_i64 = series.cast(&DataType::Int64)?;
                        let i64_series = s_i64.i64()?;
                        i64_series
                            .get(i)
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "null".to_string())
                    }
                    DataType::String => series.str()?.get(i).unwrap_or("null").to_string(),
                    _ => "?".to_string(),
                };
                row.push(value);
            }
            first_rows.push(row);
        }

        Ok(TablePreview {
            metadata,
            first_rows,
        })
    }
}
