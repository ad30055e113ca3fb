use serde::{Deserialize, Serialize};

/// GA-style parameters supplied per run.
///
/// Despite the names, these do not drive an evolutionary search: their only
/// effect is the deterministic seed derived from them (see
/// `engines::assignment::seed`). Two runs with the same parameter pair and the
/// same inputs always produce the same schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl Parameters {
    pub const CROSSOVER_RANGE: (f64, f64) = (0.0, 0.95);
    pub const MUTATION_RANGE: (f64, f64) = (0.01, 0.05);

    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Self {
        Self {
            crossover_rate,
            mutation_rate,
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        let (co_min, co_max) = Self::CROSSOVER_RANGE;
        if self.crossover_rate < co_min || self.crossover_rate > co_max {
            return Err(crate::error::AirschedError::Configuration(format!(
                "Crossover rate {} outside [{}, {}]",
                self.crossover_rate, co_min, co_max
            )));
        }
        let (mut_min, mut_max) = Self::MUTATION_RANGE;
        if self.mutation_rate < mut_min || self.mutation_rate > mut_max {
            return Err(crate::error::AirschedError::Configuration(format!(
                "Mutation rate {} outside [{}, {}]",
                self.mutation_rate, mut_min, mut_max
            )));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.02,
        }
    }
}

/// One (slot, program) pairing in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub slot: String,
    pub program: String,
}

/// The ordered output of one assignment run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn empty() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn programs(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.program.as_str())
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.slot.as_str())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

/// A labeled trial: one parameter pair and the schedule it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub label: String,
    pub parameters: Parameters,
    pub schedule: Schedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_crossover_rejected() {
        let params = Parameters::new(0.96, 0.02);
        assert!(params.validate().is_err());
    }

    #[test]
    fn out_of_range_mutation_rejected() {
        let params = Parameters::new(0.8, 0.005);
        assert!(params.validate().is_err());
        let params = Parameters::new(0.8, 0.06);
        assert!(params.validate().is_err());
    }

    #[test]
    fn schedule_accessors() {
        let schedule = Schedule::new(vec![
            Assignment {
                slot: "08:00 AM".to_string(),
                program: "News".to_string(),
            },
            Assignment {
                slot: "09:00 AM".to_string(),
                program: "Drama".to_string(),
            },
        ]);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.slots().collect::<Vec<_>>(), vec!["08:00 AM", "09:00 AM"]);
        assert_eq!(schedule.programs().collect::<Vec<_>>(), vec!["News", "Drama"]);
    }
}
