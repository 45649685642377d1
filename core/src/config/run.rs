use std::{error::Error, fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::{
    basis::TrialWavefunction,
    variational::{
        FiniteDifference, StepScaling, VariationalConfig, DELTA_A, DELTA_C, ITERATIONS,
        REPORT_INTERVAL,
    },
};

use super::{ConfigError, ConfigWavefunction};

/// Everything needed to run a calculation. Every key is optional, missing keys fall back
/// to the reference calculation.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigRun {
    /// starting point, the reference seed if absent
    initial: Option<ConfigWavefunction>,
    iterations: usize,
    report_interval: usize,
    delta_a: f64,
    delta_c: f64,
    /// scale the descent step. If absent, the raw gradient is used
    learning_rates: Option<ConfigLearningRates>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLearningRates {
    width: f64,
    coefficient: f64,
}

impl Default for ConfigRun {
    fn default() -> Self {
        Self {
            initial: None,
            iterations: ITERATIONS,
            report_interval: REPORT_INTERVAL,
            delta_a: DELTA_A,
            delta_c: DELTA_C,
            learning_rates: None,
        }
    }
}

impl ConfigRun {
    /// Read a run configuration from a json file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Split into the starting wavefunction and the optimizer settings
    pub fn into_parts(self) -> Result<(TrialWavefunction, VariationalConfig), ConfigError> {
        let initial = match self.initial {
            Some(initial) => initial.try_into()?,
            None => TrialWavefunction::reference(),
        };

        for (name, value) in [("delta_a", self.delta_a), ("delta_c", self.delta_c)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidStep { name, value });
            }
        }

        let step_scaling = match self.learning_rates {
            Some(ConfigLearningRates { width, coefficient }) => {
                StepScaling::LearningRates { width, coefficient }
            }
            None => StepScaling::Unit,
        };

        let config = VariationalConfig {
            iterations: self.iterations,
            report_interval: self.report_interval,
            finite_difference: FiniteDifference {
                width_delta: self.delta_a,
                coefficient_delta: self.delta_c,
            },
            step_scaling,
        };

        Ok((initial, config))
    }
}
