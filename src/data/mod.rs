pub mod connectors;

pub use connectors::{CsvConnector, TableMetadata, TablePreview, TableValidator};
