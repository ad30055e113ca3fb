use super::traits::ConfigSection;
use crate::error::AirschedError;
use crate::types::Parameters;
use serde::{Deserialize, Serialize};

pub const MAX_TRIALS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    pub label: String,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl TrialConfig {
    pub fn as_parameters(&self) -> Parameters {
        Parameters::new(self.crossover_rate, self.mutation_rate)
    }
}

/// Up to three independent parameter pairs evaluated in one action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialsConfig {
    pub trials: Vec<TrialConfig>,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            trials: vec![
                TrialConfig {
                    label: "Trial 1".to_string(),
                    crossover_rate: 0.8,
                    mutation_rate: 0.02,
                },
                TrialConfig {
                    label: "Trial 2".to_string(),
                    crossover_rate: 0.7,
                    mutation_rate: 0.03,
                },
                TrialConfig {
                    label: "Trial 3".to_string(),
                    crossover_rate: 0.9,
                    mutation_rate: 0.04,
                },
            ],
        }
    }
}

impl ConfigSection for TrialsConfig {
    fn section_name() -> &'static str {
        "trials"
    }

    fn validate(&self) -> Result<(), AirschedError> {
        if self.trials.is_empty() {
            return Err(AirschedError::Configuration(
                "At least one trial must be configured".to_string(),
            ));
        }
        if self.trials.len() > MAX_TRIALS {
            return Err(AirschedError::Configuration(format!(
                "At most {} trials are supported, got {}",
                MAX_TRIALS,
                self.trials.len()
            )));
        }
        for trial in &self.trials {
            if trial.label.trim().is_empty() {
                return Err(AirschedError::Configuration(
                    "Trial labels must not be blank".to_string(),
                ));
            }
            trial.as_parameters().validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trials_validate() {
        let cfg = TrialsConfig::default();
        assert_eq!(cfg.trials.len(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn too_many_trials_rejected() {
        let mut cfg = TrialsConfig::default();
        cfg.trials.push(TrialConfig {
            label: "Trial 4".to_string(),
            crossover_rate: 0.5,
            mutation_rate: 0.02,
        });
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_label_rejected() {
        let mut cfg = TrialsConfig::default();
        cfg.trials[0].label = "  ".to_string();
        assert!(cfg.validate().is_err());
    }
}
