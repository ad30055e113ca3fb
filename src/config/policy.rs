use super::traits::ConfigSection;
use crate::error::AirschedError;
use serde::{Deserialize, Serialize};

/// How time slots are derived from the loaded table.
///
/// The source material conflated two mutually exclusive readings of a
/// time-related column (its name vs. its values), so the interpretation is an
/// explicit per-deployment choice rather than a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Labels are the names of every time-related column, in declared order.
    ColumnNames,
    /// Labels are the values of the first time-related column.
    ColumnValues,
    /// Labels are synthesized as "Slot 1" .. "Slot N", N = program count.
    Synthesized,
    /// Labels are the canonical six hourly defaults, 08:00 AM .. 01:00 PM.
    FixedDefaults,
}

impl SlotPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ColumnNames => "column_names",
            Self::ColumnValues => "column_values",
            Self::Synthesized => "synthesized",
            Self::FixedDefaults => "fixed_defaults",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub slot_policy: SlotPolicy,
    /// When set, bypasses program-column detection entirely.
    pub program_column_override: Option<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            slot_policy: SlotPolicy::Synthesized,
            program_column_override: None,
        }
    }
}

impl ConfigSection for PolicyConfig {
    fn section_name() -> &'static str {
        "policy"
    }

    fn validate(&self) -> Result<(), AirschedError> {
        if let Some(name) = &self.program_column_override {
            if name.trim().is_empty() {
                return Err(AirschedError::Configuration(
                    "Program column override must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}
