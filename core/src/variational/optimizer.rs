use serde::Serialize;

use crate::basis::TrialWavefunction;

use super::{
    energy, linear, step::descent_step, StepScaling, VariationalConfig, EXACT_GROUND_STATE_ENERGY,
};

/// Snapshot of the optimization, taken every `report_interval` steps
#[derive(Clone, Debug, Serialize)]
pub struct Checkpoint {
    /// index of the step after which the snapshot was taken
    pub iteration: usize,
    pub energy: f64,
    pub wavefunction: TrialWavefunction,
}

/// The output of a variational minimization
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct VariationalOutput {
    /// the optimized wavefunction, normalized
    pub wavefunction: TrialWavefunction,
    /// <psi|H|psi> / <psi|psi> of the optimized wavefunction
    pub energy: f64,
    /// <psi|psi> after normalization, one up to rounding
    pub norm: f64,
    /// <psi|psi> right before the final normalization
    pub unnormalized_norm: f64,
    /// how many descent steps were taken
    pub iterations: usize,
    pub checkpoints: Vec<Checkpoint>,
}

impl VariationalOutput {
    /// Distance to the exact ground state energy. Always positive for a finite energy.
    pub fn error(&self) -> f64 {
        self.energy - EXACT_GROUND_STATE_ENERGY
    }

    /// The best energy reachable with the optimized widths, if the coefficients were
    /// solved for exactly.
    pub fn linear_optimum(&self) -> linear::LinearOptimum {
        linear::linear_optimum(self.wavefunction.widths())
    }
}

/// Minimize the energy of a trial wavefunction by steepest descent with numerical
/// gradients, then normalize it.
///
/// Runs exactly `config.iterations` steps and never stops early. Non-finite energies are
/// not detected and carry through to the output.
pub fn variational_minimization(
    initial: TrialWavefunction,
    config: &VariationalConfig,
) -> VariationalOutput {
    if let StepScaling::LearningRates { width, coefficient } = config.step_scaling {
        log::warn!(
            "learning rates are applied to the descent step (widths {width}, coefficients {coefficient})"
        );
    }
    log::debug!(
        "starting energy: {:1.10} with {} basis functions",
        initial.energy(),
        initial.n_terms()
    );

    let mut wavefunction = initial;
    let mut checkpoints = Vec::new();

    for iteration in 0..config.iterations {
        wavefunction = descent_step(wavefunction, config);

        if iteration.checked_rem(config.report_interval) == Some(0) {
            let energy = wavefunction.energy();
            log::info!(
                "iteration {iteration:<6} - energy {energy:1.10}. c = {:1.6?}, a = {:1.6?}",
                wavefunction.coefficients().as_slice(),
                wavefunction.widths().as_slice(),
            );
            checkpoints.push(Checkpoint {
                iteration,
                energy,
                wavefunction: wavefunction.clone(),
            });
        }
    }

    let unnormalized_norm = energy::normalize(&mut wavefunction);
    let energy::EnergyEvaluation { energy, norm } =
        energy::evaluate(wavefunction.coefficients(), wavefunction.widths());

    log::info!(
        "normalized - energy {energy:1.10}, normalization {norm:1.10}. c = {:1.6?}, a = {:1.6?}",
        wavefunction.coefficients().as_slice(),
        wavefunction.widths().as_slice(),
    );
    if !energy.is_finite() {
        log::warn!("the final energy is not finite");
    }

    VariationalOutput {
        wavefunction,
        energy,
        norm,
        unnormalized_norm,
        iterations: config.iterations,
        checkpoints,
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{
        basis::TrialWavefunction,
        variational::{StepScaling, VariationalConfig, EXACT_GROUND_STATE_ENERGY},
    };

    use super::{variational_minimization, VariationalOutput};

    #[test]
    fn reference_run() {
        let initial = TrialWavefunction::reference();
        let initial_energy = initial.energy();

        let output = variational_minimization(initial, &VariationalConfig::default());
        let VariationalOutput {
            ref wavefunction,
            energy,
            norm,
            unnormalized_norm,
            iterations,
            ref checkpoints,
        } = output;

        assert_eq!(iterations, 10_000);
        assert!(energy.is_finite());
        assert!(energy > EXACT_GROUND_STATE_ENERGY);
        assert!(energy < initial_energy);
        assert_relative_eq!(energy, -0.499_328_808_454_756, epsilon = 1e-5);
        assert!(output.error() > 0.0 && output.error() < 1e-3);

        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(wavefunction.norm(), 1.0, epsilon = 1e-10);
        assert!(unnormalized_norm > 0.0);
        assert!(wavefunction.widths().iter().all(|&a| a > 0.0));

        let reported = checkpoints.iter().map(|c| c.iteration).collect::<Vec<_>>();
        assert_eq!(
            reported,
            [0, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000]
        );
        assert!(checkpoints.iter().all(|c| c.energy.is_finite()));
        // not monotonic step for step, but clearly downhill over the run
        assert!(checkpoints.last().unwrap().energy < checkpoints[0].energy);
        assert!(energy <= checkpoints.last().unwrap().energy + 1e-6);

        let optimum = output.linear_optimum();
        assert!(optimum.energy <= energy + 1e-9);
        assert!(optimum.energy > EXACT_GROUND_STATE_ENERGY);
    }

    #[test]
    fn reference_run_with_learning_rates() {
        let initial = TrialWavefunction::reference();
        let initial_energy = initial.energy();
        let config = VariationalConfig {
            step_scaling: StepScaling::reference_rates(),
            ..VariationalConfig::default()
        };

        let output = variational_minimization(initial, &config);

        assert!(output.energy.is_finite());
        assert!(output.energy < initial_energy);
        assert!(output.energy > EXACT_GROUND_STATE_ENERGY);
        assert_abs_diff_eq!(output.norm, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn zero_iterations_only_normalizes() {
        let initial = TrialWavefunction::reference();
        let config = VariationalConfig {
            iterations: 0,
            ..VariationalConfig::default()
        };

        let output = variational_minimization(initial.clone(), &config);

        assert!(output.checkpoints.is_empty());
        assert_relative_eq!(output.unnormalized_norm, initial.norm(), epsilon = 1e-12);
        assert_relative_eq!(output.energy, initial.energy(), epsilon = 1e-12);
        assert_eq!(output.wavefunction.widths(), initial.widths());
        assert_abs_diff_eq!(output.norm, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_report_interval_disables_checkpoints() {
        let config = VariationalConfig {
            iterations: 5,
            report_interval: 0,
            ..VariationalConfig::default()
        };

        let output = variational_minimization(TrialWavefunction::reference(), &config);
        assert!(output.checkpoints.is_empty());
        assert_eq!(output.iterations, 5);
    }

    #[test]
    fn report_interval_controls_checkpoints() {
        let config = VariationalConfig {
            iterations: 25,
            report_interval: 10,
            ..VariationalConfig::default()
        };

        let output = variational_minimization(TrialWavefunction::reference(), &config);
        let reported = output
            .checkpoints
            .iter()
            .map(|c| c.iteration)
            .collect::<Vec<_>>();

        assert_eq!(reported, [0, 10, 20]);
    }
}
