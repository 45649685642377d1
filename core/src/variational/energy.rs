use nalgebra::DVector;

use crate::{
    basis::TrialWavefunction,
    integrals::{DefaultIntegrator, Integrator},
};

/// Energy expectation value together with the norm it was divided by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyEvaluation {
    /// <psi|H|psi> / <psi|psi>
    pub energy: f64,
    /// <psi|psi>
    pub norm: f64,
}

/// Evaluate both double sums over all (i, j) pairs of basis functions.
///
/// Every ordered pair is computed on its own, the symmetry between (i, j) and (j, i) is
/// not used.
pub fn evaluate_with(
    integrator: &impl Integrator<Function = f64>,
    coefficients: &DVector<f64>,
    widths: &DVector<f64>,
) -> EnergyEvaluation {
    let n = widths.len();

    let mut hamiltonian = 0.0;
    let mut norm = 0.0;
    for (i, j) in itertools::iproduct!(0..n, 0..n) {
        let weight = coefficients[i] * coefficients[j];
        let pair = (&widths[i], &widths[j]);

        hamiltonian += weight * integrator.energy(pair);
        norm += weight * integrator.overlap(pair);
    }

    EnergyEvaluation {
        energy: hamiltonian / norm,
        norm,
    }
}

pub fn evaluate(coefficients: &DVector<f64>, widths: &DVector<f64>) -> EnergyEvaluation {
    evaluate_with(&DefaultIntegrator::default(), coefficients, widths)
}

/// The rayleigh quotient <psi|H|psi> / <psi|psi> of the trial wavefunction. A vanishing
/// norm is not guarded against and yields a non-finite energy.
pub fn composite_energy(coefficients: &DVector<f64>, widths: &DVector<f64>) -> f64 {
    evaluate(coefficients, widths).energy
}

pub fn norm_with(
    integrator: &impl Integrator<Function = f64>,
    coefficients: &DVector<f64>,
    widths: &DVector<f64>,
) -> f64 {
    let n = widths.len();

    let mut norm = 0.0;
    for (i, j) in itertools::iproduct!(0..n, 0..n) {
        norm += coefficients[i] * coefficients[j] * integrator.overlap((&widths[i], &widths[j]));
    }
    norm
}

/// <psi|psi>
pub fn norm(coefficients: &DVector<f64>, widths: &DVector<f64>) -> f64 {
    norm_with(&DefaultIntegrator::default(), coefficients, widths)
}

impl TrialWavefunction {
    pub fn energy(&self) -> f64 {
        composite_energy(&self.coefficients, &self.widths)
    }

    pub fn norm(&self) -> f64 {
        norm(&self.coefficients, &self.widths)
    }
}

/// Rescale the coefficients so that <psi|psi> = 1. Returns the norm before rescaling.
///
/// The wavefunction must have a positive norm, otherwise the coefficients become NaN.
pub fn normalize(wavefunction: &mut TrialWavefunction) -> f64 {
    let norm = wavefunction.norm();
    wavefunction.coefficients /= norm.sqrt();
    log::debug!("normalization before rescaling: {norm}");
    norm
}
