use crate::error::{AirschedError, Result};
use polars::prelude::*;

pub struct TableValidator;

impl TableValidator {
    /// Validate that a loaded table is usable as a program table.
    ///
    /// A table with zero columns or zero rows is rejected outright; a table
    /// whose program column turns out to hold only empty cells is not an
    /// error here (it yields an empty schedule downstream).
    pub fn validate_shape(df: &DataFrame) -> Result<()> {
        if df.width() == 0 {
            return Err(AirschedError::InvalidInput(
                "Table has no columns".to_string(),
            ));
        }
        if df.height() == 0 {
            return Err(AirschedError::InvalidInput(
                "Table has no rows".to_string(),
            ));
        }
        Ok(())
    }

    /// Check for null values across all columns
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn accepts_normal_table() {
        let df = df! {
            "Program" => &["News", "Sports"],
            "Hour 6" => &[5.1, 4.2],
        }
        .unwrap();
        assert!(TableValidator::validate_shape(&df).is_ok());
    }

    #[test]
    fn rejects_zero_columns() {
        let df = DataFrame::empty();
        let result = TableValidator::validate_shape(&df);
        assert!(matches!(result, Err(AirschedError::InvalidInput(_))));
    }

    #[test]
    fn rejects_zero_rows() {
        let df = df! {
            "Program" => &Vec::<String>::new(),
        }
        .unwrap();
        let result = TableValidator::validate_shape(&df);
        assert!(matches!(result, Err(AirschedError::InvalidInput(_))));
    }

    #[test]
    fn reports_nulls() {
        let df = df! {
            "Program" => &[Some("News"), None, Some("Drama")],
        }
        .unwrap();
        let report = TableValidator::check_nulls(&df).unwrap();
        assert_eq!(report, vec![("Program".to_string(), 1)]);
    }
}
