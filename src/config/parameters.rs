use super::traits::ConfigSection;
use crate::error::AirschedError;
use crate::types::Parameters;
use serde::{Deserialize, Serialize};

/// Default GA parameter pair for single runs.
///
/// Defaults mirror the original slider defaults: crossover 0.8, mutation 0.02.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersConfig {
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl ParametersConfig {
    pub fn as_parameters(&self) -> Parameters {
        Parameters::new(self.crossover_rate, self.mutation_rate)
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.02,
        }
    }
}

impl ConfigSection for ParametersConfig {
    fn section_name() -> &'static str {
        "parameters"
    }

    fn validate(&self) -> Result<(), AirschedError> {
        self.as_parameters().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(ParametersConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_rates_rejected() {
        let cfg = ParametersConfig {
            crossover_rate: 1.2,
            mutation_rate: 0.02,
        };
        assert!(cfg.validate().is_err());
    }
}
