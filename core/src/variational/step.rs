use serde::{Deserialize, Serialize};

use crate::basis::TrialWavefunction;

use super::{gradient, VariationalConfig, ALPHA_LEARNING_RATE, COEFF_LEARNING_RATE};

/// How the gradient is scaled before it is subtracted from the parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum StepScaling {
    /// Subtract the raw gradient. This is the update of the reference calculation.
    #[default]
    Unit,
    /// Multiply the width and coefficient gradients by separate learning rates.
    LearningRates { width: f64, coefficient: f64 },
}

impl StepScaling {
    /// [`StepScaling::LearningRates`] with both rates at their reference value of 0.1
    pub const fn reference_rates() -> Self {
        Self::LearningRates {
            width: ALPHA_LEARNING_RATE,
            coefficient: COEFF_LEARNING_RATE,
        }
    }

    /// (width rate, coefficient rate)
    pub fn rates(&self) -> (f64, f64) {
        match *self {
            Self::Unit => (1.0, 1.0),
            Self::LearningRates { width, coefficient } => (width, coefficient),
        }
    }
}

/// Advance the wavefunction by one steepest descent step.
///
/// The width update is multiplied by the current width, a_i -= g_i * a_i, which keeps the
/// widths positive as long as the scaled gradient stays below one. Coefficients take a
/// plain step, c_i -= g_i. Positivity of the widths is not checked.
pub fn descent_step(
    mut wavefunction: TrialWavefunction,
    config: &VariationalConfig,
) -> TrialWavefunction {
    let gradient = gradient::forward_difference(&wavefunction, &config.finite_difference);
    log::debug!("energy before step: {:1.10}", gradient.energy);

    let (width_rate, coefficient_rate) = config.step_scaling.rates();

    let width_step = (gradient.widths * width_rate).component_mul(&wavefunction.widths);
    wavefunction.widths -= width_step;
    wavefunction.coefficients -= gradient.coefficients * coefficient_rate;

    wavefunction
}
