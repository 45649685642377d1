//! Closed form integrals between spherical gaussians exp(-a*r^2) that share their center
//! with a single nucleus of unit charge. All quantities are in atomic units.
//!
//! None of these functions guard against `ap + aq == 0`, the division is left to IEEE
//! semantics and yields a non-finite value.
use std::f64::consts::PI;

use super::Integrator;

/// pi^(3/2)
const PI_3_2: f64 = 5.568_327_996_831_708;

/// Integrator for basis functions described by their width alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct HydrogenicIntegrator;

impl Integrator for HydrogenicIntegrator {
    type Function = f64;

    fn overlap(&self, (&ap, &aq): (&f64, &f64)) -> f64 {
        overlap(ap, aq)
    }

    fn kinetic(&self, (&ap, &aq): (&f64, &f64)) -> f64 {
        kinetic(ap, aq)
    }

    fn potential(&self, (&ap, &aq): (&f64, &f64)) -> f64 {
        potential(ap, aq)
    }

    fn energy(&self, (&ap, &aq): (&f64, &f64)) -> f64 {
        single_pair_energy(ap, aq)
    }
}

/// <p|q>
#[inline]
pub fn overlap(ap: f64, aq: f64) -> f64 {
    PI_3_2 / (ap + aq).powf(1.5)
}

/// <p|-1/2 nabla^2|q>
#[inline]
pub fn kinetic(ap: f64, aq: f64) -> f64 {
    3.0 * PI_3_2 * (ap * aq) / (ap + aq).powf(2.5)
}

/// <p|-1/r|q>
#[inline]
pub fn potential(ap: f64, aq: f64) -> f64 {
    -2.0 * PI / (ap + aq)
}

#[inline]
pub fn single_pair_energy(ap: f64, aq: f64) -> f64 {
    kinetic(ap, aq) + potential(ap, aq)
}
