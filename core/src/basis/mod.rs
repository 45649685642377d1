mod functions;

pub use functions::{Gaussian, TrialWavefunction, N_TERMS};
