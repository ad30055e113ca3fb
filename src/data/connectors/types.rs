use serde::{Deserialize, Serialize};

/// Metadata about a loaded program table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    /// Column the program list would be read from, per detection rules.
    pub program_column: Option<String>,
    /// Time-related columns (name contains hour/time/slot/schedule).
    pub slot_columns: Vec<String>,
}

/// Preview for terminal display
#[derive(Debug, Clone)]
pub struct TablePreview {
    pub metadata: TableMetadata,
    pub first_rows: Vec<Vec<String>>,
}
