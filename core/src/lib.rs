//! Variational estimate of the hydrogen ground state energy, using a linear combination
//! of spherical gaussians whose widths and coefficients are optimized by steepest descent
//! with finite difference gradients.
pub mod basis;
pub mod config;
pub mod integrals;
pub mod variational;

pub use basis::TrialWavefunction;
pub use variational::{variational_minimization, VariationalConfig, VariationalOutput};
