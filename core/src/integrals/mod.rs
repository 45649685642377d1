pub mod hydrogenic;

pub use hydrogenic::{kinetic, overlap, potential, single_pair_energy, HydrogenicIntegrator};

pub type DefaultIntegrator = HydrogenicIntegrator;

pub trait Integrator {
    type Function;

    /// Calculate the overlap integral between two basis functions.
    fn overlap(&self, functions: (&Self::Function, &Self::Function)) -> f64;

    /// Calculate the kinetic energy integral between two basis functions.
    fn kinetic(&self, functions: (&Self::Function, &Self::Function)) -> f64;

    /// Calculate the nuclear attraction integral between two basis functions.
    fn potential(&self, functions: (&Self::Function, &Self::Function)) -> f64;

    /// The one electron hamiltonian matrix element between two basis functions.
    fn energy(&self, functions: (&Self::Function, &Self::Function)) -> f64 {
        self.kinetic(functions) + self.potential(functions)
    }
}
