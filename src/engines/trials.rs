use crate::config::traits::ConfigSection;
use crate::config::{PolicyConfig, TrialsConfig};
use crate::engines::assignment::{detect, extract, slots, AssignmentEngine};
use crate::error::Result;
use crate::types::TrialOutcome;
use polars::prelude::*;
use rayon::prelude::*;

/// Runs up to three labeled parameter pairs against one table.
///
/// Detection and extraction happen once; each trial is an independent,
/// side-effect-free `assign` over the shared read-only lists, so trials run
/// in parallel.
pub struct TrialRunner;

impl TrialRunner {
    pub fn run(df: &DataFrame, trials: &TrialsConfig, policy: &PolicyConfig) -> Result<Vec<TrialOutcome>> {
        trials.validate()?;
        policy.validate()?;

        let column = match &policy.program_column_override {
            Some(name) => name.clone(),
            None => detect::detect_program_column(df)?,
        };
        let programs = extract::extract_programs(df, &column)?;
        if programs.is_empty() {
            log::warn!("Column '{}' yielded no programs; all trials are empty", column);
        }
        let slot_labels = slots::detect_slots(df, policy.slot_policy, programs.len())?;

        let outcomes = trials
            .trials
            .par_iter()
            .map(|trial| {
                let params = trial.as_parameters();
                TrialOutcome {
                    label: trial.label.clone(),
                    parameters: params,
                    schedule: AssignmentEngine::assign(&programs, &slot_labels, &params),
                }
            })
            .collect();

        Ok(outcomes)
    }
}
