use std::fmt;

pub use run::ConfigRun;
pub use wavefunction::ConfigWavefunction;

mod run;
mod wavefunction;

/// Reasons a configuration can not be turned into a calculation
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    LengthMismatch { coefficients: usize, widths: usize },
    EmptyBasis,
    InvalidWidth { index: usize, width: f64 },
    InvalidStep { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                coefficients,
                widths,
            } => write!(
                f,
                "got {coefficients} coefficients but {widths} widths, every basis function needs one of each"
            ),
            Self::EmptyBasis => write!(f, "the trial wavefunction needs at least one basis function"),
            Self::InvalidWidth { index, width } => {
                write!(f, "width {index} is {width}, widths have to be positive and finite")
            }
            Self::InvalidStep { name, value } => {
                write!(f, "{name} is {value}, it has to be positive and finite")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
