pub mod cli;
pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod export;
pub mod types;

pub use engines::{AssignmentEngine, TrialRunner};
pub use error::{AirschedError, Result};
pub use types::{Assignment, Parameters, Schedule, TrialOutcome};
