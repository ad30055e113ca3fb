use super::{detect, extract, seed, slots};
use crate::config::PolicyConfig;
use crate::error::Result;
use crate::types::{Assignment, Parameters, Schedule};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The schedule assignment engine.
///
/// A pure, stateless transformation: one invocation per requested run, no
/// retries, no partial recovery. Failures surface synchronously as typed
/// errors; an empty program list is not a failure and yields an empty
/// schedule.
pub struct AssignmentEngine;

impl AssignmentEngine {
    /// Pair programs with slots after a seeded permutation.
    ///
    /// Output length equals `slots.len()` whenever `programs` is non-empty:
    /// short program lists repeat round-robin, long ones are truncated.
    pub fn assign(programs: &[String], slots: &[String], params: &Parameters) -> Schedule {
        if programs.is_empty() || slots.is_empty() {
            return Schedule::empty();
        }

        let mut shuffled = programs.to_vec();
        let mut rng = StdRng::seed_from_u64(seed::derive_seed(params));
        shuffled.shuffle(&mut rng);

        let assignments = slots
            .iter()
            .zip(shuffled.iter().cycle())
            .map(|(slot, program)| Assignment {
                slot: slot.clone(),
                program: program.clone(),
            })
            .collect();

        Schedule::new(assignments)
    }

    /// Full pipeline: detect the program column, extract programs, derive
    /// slots under the configured policy, assign.
    pub fn run(df: &DataFrame, params: &Parameters, policy: &PolicyConfig) -> Result<Schedule> {
        params.validate()?;
        policy.validate_against(df)?;

        let column = match &policy.program_column_override {
            Some(name) => name.clone(),
            None => detect::detect_program_column(df)?,
        };

        let programs = extract::extract_programs(df, &column)?;
        if programs.is_empty() {
            log::warn!("Column '{}' yielded no programs; schedule is empty", column);
            return Ok(Schedule::empty());
        }

        let slot_labels = slots::detect_slots(df, policy.slot_policy, programs.len())?;

        Ok(Self::assign(&programs, &slot_labels, params))
    }
}

impl PolicyConfig {
    /// An explicit override must name a real column; detection is total and
    /// needs no such check.
    fn validate_against(&self, df: &DataFrame) -> Result<()> {
        if let Some(name) = &self.program_column_override {
            df.column(name).map_err(|_| {
                crate::error::AirschedError::InvalidInput(format!(
                    "Configured program column '{}' not found in table",
                    name
                ))
            })?;
        }
        Ok(())
    }
}
