pub mod energy;
pub mod gradient;
pub mod linear;
mod optimizer;
pub mod step;
pub(super) mod utils;

use serde::{Deserialize, Serialize};

pub use crate::basis::N_TERMS;
pub use energy::{composite_energy, norm, normalize, EnergyEvaluation};
pub use gradient::{FiniteDifference, Gradient, ScopedPerturbation};
pub use linear::{linear_optimum, LinearOptimum};
pub use optimizer::{variational_minimization, Checkpoint, VariationalOutput};
pub use step::{descent_step, StepScaling};

pub const ALPHA_LEARNING_RATE: f64 = 0.1;
pub const COEFF_LEARNING_RATE: f64 = 0.1;
pub const DELTA_A: f64 = 0.001;
pub const DELTA_C: f64 = 0.001;
pub const ITERATIONS: usize = 10_000;
pub const REPORT_INTERVAL: usize = 1_000;

/// Ground state energy of the hydrogen atom in hartree
pub const EXACT_GROUND_STATE_ENERGY: f64 = -0.5;

/// Settings of a variational minimization
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariationalConfig {
    /// the number of descent steps. There is no convergence criterion, all of them are taken.
    pub iterations: usize,
    /// progress is reported after every step whose index is a multiple of this, zero
    /// turns progress reports off
    pub report_interval: usize,
    pub finite_difference: FiniteDifference,
    pub step_scaling: StepScaling,
}

impl Default for VariationalConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            report_interval: REPORT_INTERVAL,
            finite_difference: FiniteDifference::default(),
            step_scaling: StepScaling::Unit,
        }
    }
}
