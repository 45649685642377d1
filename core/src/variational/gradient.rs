use std::ops::Deref;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::basis::TrialWavefunction;

use super::{energy::composite_energy, DELTA_A, DELTA_C};

/// Step sizes of the forward finite differences.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiniteDifference {
    pub width_delta: f64,
    pub coefficient_delta: f64,
}

impl Default for FiniteDifference {
    fn default() -> Self {
        Self {
            width_delta: DELTA_A,
            coefficient_delta: DELTA_C,
        }
    }
}

/// Numerical gradient of the composite energy.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// The energy at the point the gradient was taken
    pub energy: f64,
    /// dE/da_i
    pub widths: DVector<f64>,
    /// dE/dc_i
    pub coefficients: DVector<f64>,
}

/// A single parameter shifted by some delta, for as long as this guard lives.
///
/// The original value is written back when the guard is dropped, so the parameters are
/// restored bit for bit on every path out of the scope, unwinding included.
pub struct ScopedPerturbation<'a> {
    parameters: &'a mut DVector<f64>,
    index: usize,
    original: f64,
}

impl<'a> ScopedPerturbation<'a> {
    pub fn new(parameters: &'a mut DVector<f64>, index: usize, delta: f64) -> Self {
        let original = parameters[index];
        parameters[index] += delta;

        Self {
            parameters,
            index,
            original,
        }
    }
}

impl Deref for ScopedPerturbation<'_> {
    type Target = DVector<f64>;

    fn deref(&self) -> &Self::Target {
        &*self.parameters
    }
}

impl Drop for ScopedPerturbation<'_> {
    fn drop(&mut self) {
        self.parameters[self.index] = self.original;
    }
}

/// Estimate the gradient of the composite energy with forward differences.
///
/// Widths are probed first, then coefficients. The wavefunction that is passed in is never
/// modified, every probe works on a scratch copy.
pub fn forward_difference(wavefunction: &TrialWavefunction, steps: &FiniteDifference) -> Gradient {
    let TrialWavefunction {
        coefficients,
        widths,
    } = wavefunction;
    let energy = composite_energy(coefficients, widths);

    let width_gradient = partial_derivatives(widths, steps.width_delta, energy, |widths| {
        composite_energy(coefficients, widths)
    });
    let coefficient_gradient = partial_derivatives(
        coefficients,
        steps.coefficient_delta,
        energy,
        |coefficients| composite_energy(coefficients, widths),
    );

    log::trace!("width gradient: {:1.6?}", width_gradient.as_slice());
    log::trace!("coefficient gradient: {:1.6?}", coefficient_gradient.as_slice());

    Gradient {
        energy,
        widths: width_gradient,
        coefficients: coefficient_gradient,
    }
}

#[cfg(not(feature = "rayon"))]
fn partial_derivatives(
    parameters: &DVector<f64>,
    delta: f64,
    baseline: f64,
    energy: impl Fn(&DVector<f64>) -> f64,
) -> DVector<f64> {
    let mut scratch = parameters.clone();

    DVector::from_fn(parameters.len(), |index, _| {
        let perturbed = ScopedPerturbation::new(&mut scratch, index, delta);
        (energy(&*perturbed) - baseline) / delta
    })
}

#[cfg(feature = "rayon")]
fn partial_derivatives(
    parameters: &DVector<f64>,
    delta: f64,
    baseline: f64,
    energy: impl Fn(&DVector<f64>) -> f64 + Sync,
) -> DVector<f64> {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    // every probe gets its own copy, they all finish before the gradient is returned
    let partials = (0..parameters.len())
        .into_par_iter()
        .map(|index| {
            let mut scratch = parameters.clone();
            let perturbed = ScopedPerturbation::new(&mut scratch, index, delta);
            (energy(&*perturbed) - baseline) / delta
        })
        .collect::<Vec<_>>();

    DVector::from_vec(partials)
}
