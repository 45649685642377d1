use serde::Deserialize;

use crate::basis::TrialWavefunction;

use super::ConfigError;

/// A trial wavefunction in a config file: two lists of equal length.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigWavefunction {
    coefficients: Vec<f64>,
    widths: Vec<f64>,
}

impl TryFrom<ConfigWavefunction> for TrialWavefunction {
    type Error = ConfigError;

    fn try_from(value: ConfigWavefunction) -> Result<Self, Self::Error> {
        let ConfigWavefunction {
            coefficients,
            widths,
        } = value;

        if coefficients.len() != widths.len() {
            return Err(ConfigError::LengthMismatch {
                coefficients: coefficients.len(),
                widths: widths.len(),
            });
        }
        if widths.is_empty() {
            return Err(ConfigError::EmptyBasis);
        }
        if let Some((index, &width)) = widths
            .iter()
            .enumerate()
            .find(|(_, width)| !(width.is_finite() && **width > 0.0))
        {
            return Err(ConfigError::InvalidWidth { index, width });
        }

        Ok(TrialWavefunction::from_slices(&coefficients, &widths))
    }
}

#[cfg(test)]
mod tests {
    use crate::{basis::TrialWavefunction, config::ConfigError};

    use super::ConfigWavefunction;

    fn parse(json: &str) -> Result<TrialWavefunction, ConfigError> {
        serde_json::from_str::<ConfigWavefunction>(json)
            .unwrap()
            .try_into()
    }

    #[test]
    fn valid_wavefunction() {
        let wavefunction = parse(r#"{"coefficients": [1.0, -0.5], "widths": [0.3, 2.0]}"#).unwrap();

        assert_eq!(wavefunction.n_terms(), 2);
        assert_eq!(wavefunction.coefficients().as_slice(), &[1.0, -0.5]);
        assert_eq!(wavefunction.widths().as_slice(), &[0.3, 2.0]);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            parse(r#"{"coefficients": [1.0, 1.0, 1.0], "widths": [0.3, 2.0]}"#),
            Err(ConfigError::LengthMismatch {
                coefficients: 3,
                widths: 2
            })
        );
    }

    #[test]
    fn rejects_empty_basis() {
        assert_eq!(
            parse(r#"{"coefficients": [], "widths": []}"#),
            Err(ConfigError::EmptyBasis)
        );
    }

    #[test]
    fn rejects_non_positive_widths() {
        assert_eq!(
            parse(r#"{"coefficients": [1.0, 1.0], "widths": [0.3, -2.0]}"#),
            Err(ConfigError::InvalidWidth {
                index: 1,
                width: -2.0
            })
        );
        assert!(parse(r#"{"coefficients": [1.0], "widths": [0.0]}"#).is_err());
    }
}
