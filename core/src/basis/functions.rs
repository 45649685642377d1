use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// The number of terms in the reference expansion.
pub const N_TERMS: usize = 6;

const REFERENCE_COEFFICIENTS: [f64; N_TERMS] = [
    0.82756178, 0.83292796, 0.32551525, 0.53784354, 0.25101611, 0.14072509,
];
const REFERENCE_WIDTHS: [f64; N_TERMS] = [
    0.76627919, 0.57237301, 0.77900288, 0.09414339, 0.98226739, 0.87722718,
];

/// Spherical gaussian of the form c*exp(-a*r^2), centered on the nucleus
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub width: f64,
    /// The (unnormalized) expansion coefficient of this gaussian
    pub coefficient: f64,
}

impl Gaussian {
    /// Normalization constant of an s-type gaussian with the given width
    pub fn norm(width: f64) -> f64 {
        (std::f64::consts::FRAC_2_PI * width).powi(3).sqrt().sqrt()
    }

    /// Evaluate this term at a distance `r` from the nucleus
    pub fn evaluate(&self, r: f64) -> f64 {
        self.coefficient * (-self.width * r * r).exp()
    }
}

/// Linear combination of spherical [`Gaussian`]s.
///
/// Widths and coefficients are kept as two parallel vectors, `widths[i]` and
/// `coefficients[i]` together describe the i-th basis function. Both vectors always
/// have the same length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialWavefunction {
    pub(crate) coefficients: DVector<f64>,
    pub(crate) widths: DVector<f64>,
}

impl TrialWavefunction {
    /// Create a trial wavefunction from its coefficients and widths.
    ///
    /// Panics if the two vectors differ in length.
    pub fn new(coefficients: DVector<f64>, widths: DVector<f64>) -> Self {
        assert_eq!(
            coefficients.len(),
            widths.len(),
            "every basis function needs exactly one coefficient and one width"
        );

        Self {
            coefficients,
            widths,
        }
    }

    pub fn from_slices(coefficients: &[f64], widths: &[f64]) -> Self {
        Self::new(
            DVector::from_column_slice(coefficients),
            DVector::from_column_slice(widths),
        )
    }

    /// The six term starting point used by the reference calculation
    pub fn reference() -> Self {
        Self::from_slices(&REFERENCE_COEFFICIENTS, &REFERENCE_WIDTHS)
    }

    pub fn n_terms(&self) -> usize {
        self.widths.len()
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    pub fn widths(&self) -> &DVector<f64> {
        &self.widths
    }

    pub fn terms(&self) -> impl Iterator<Item = Gaussian> + '_ {
        self.widths
            .iter()
            .zip(self.coefficients.iter())
            .map(|(&width, &coefficient)| Gaussian { width, coefficient })
    }

    /// Evaluate the (radial) wavefunction at a distance `r` from the nucleus
    pub fn evaluate(&self, r: f64) -> f64 {
        self.terms().map(|term| term.evaluate(r)).sum()
    }
}

impl Default for TrialWavefunction {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use super::{Gaussian, TrialWavefunction, N_TERMS};

    #[test]
    fn reference_has_six_terms() {
        let wavefunction = TrialWavefunction::reference();
        assert_eq!(wavefunction.n_terms(), N_TERMS);
        assert_eq!(wavefunction.coefficients().len(), wavefunction.widths().len());
        assert!(wavefunction.widths().iter().all(|&a| a > 0.0));
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        TrialWavefunction::new(DVector::from_element(3, 1.0), DVector::from_element(2, 1.0));
    }

    #[test]
    fn evaluate_sums_terms() {
        let wavefunction = TrialWavefunction::from_slices(&[1.0, 2.0], &[0.5, 1.5]);

        assert_relative_eq!(wavefunction.evaluate(0.0), 3.0);
        assert_relative_eq!(
            wavefunction.evaluate(1.0),
            (-0.5f64).exp() + 2.0 * (-1.5f64).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn gaussian_norm() {
        // (2a / pi)^(3/4)
        let width = 0.7;
        assert_relative_eq!(
            Gaussian::norm(width),
            (2.0 * width / std::f64::consts::PI).powf(0.75),
            epsilon = 1e-14
        );
    }
}
