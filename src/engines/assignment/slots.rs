use super::{detect, extract};
use crate::config::SlotPolicy;
use crate::error::Result;
use polars::prelude::*;

/// Canonical fixed defaults, one per hour, matching the original deployment.
pub const DEFAULT_SLOTS: [&str; 6] = [
    "08:00 AM", "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM",
];

/// Derive slot labels from the table under the configured policy.
///
/// `fallback_len` is the program count, used when labels must be synthesized.
/// The column-backed policies fall back to synthesis when the table has no
/// time-related column, so the result is non-empty whenever `fallback_len > 0`
/// or the fixed-default policy is active.
pub fn detect_slots(df: &DataFrame, policy: SlotPolicy, fallback_len: usize) -> Result<Vec<String>> {
    let slots = match policy {
        SlotPolicy::ColumnNames => detect::time_related_columns(df),
        SlotPolicy::ColumnValues => match detect::time_related_columns(df).first() {
            Some(col) => extract::extract_programs(df, col)?,
            None => Vec::new(),
        },
        SlotPolicy::Synthesized => Vec::new(),
        SlotPolicy::FixedDefaults => {
            return Ok(DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect())
        }
    };

    if !slots.is_empty() {
        return Ok(slots);
    }

    Ok(synthesize_slots(fallback_len))
}

fn synthesize_slots(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Slot {}", i)).collect()
}
