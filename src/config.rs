//! Packing configuration

use crate::error::PackError;

/// Configuration for a packing run, fixed at invocation.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Number of grid columns
    pub columns: u32,
    /// Uniform scale factor applied to every source image
    pub scale_factor: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            columns: 6,
            scale_factor: 0.5,
        }
    }
}

impl PackConfig {
    /// Check configuration values before any work happens.
    pub fn validate(&self) -> Result<(), PackError> {
        if self.columns == 0 {
            return Err(PackError::InvalidConfig(
                "columns must be at least 1".to_string(),
            ));
        }
        if self.scale_factor <= 0.0 || !self.scale_factor.is_finite() {
            return Err(PackError::InvalidConfig(format!(
                "scale factor must be a positive number, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();
        assert_eq!(config.columns, 6);
        assert_eq!(config.scale_factor, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = PackConfig {
            columns: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = PackConfig {
                scale_factor: bad,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(PackError::InvalidConfig(_))),
                "scale {} should be rejected",
                bad
            );
        }
    }
}
