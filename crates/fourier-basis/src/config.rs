//! Basis configuration

use crate::error::{BasisError, Result};
use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// Fourier basis configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasisConfig {
    /// State dimensionality `k` (must be at least 1)
    pub features: usize,

    /// Basis order `n`, the highest frequency used per dimension
    pub order: usize,
}

impl Default for BasisConfig {
    fn default() -> Self {
        Self {
            features: 1,
            order: 3,
        }
    }
}

impl BasisConfig {
    /// Create a config for `features` state dimensions at the given order
    pub fn new(features: usize, order: usize) -> Self {
        Self { features, order }
    }

    /// Check the config and return the number of basis functions, `(n+1)^k`.
    ///
    /// Besides `k >= 1`, this rejects orders that do not fit a `u32`
    /// coefficient and bases whose `k × (n+1)^k` frequency matrix would
    /// exceed `isize::MAX` bytes.
    pub fn validate(&self) -> Result<usize> {
        if self.features == 0 {
            return Err(BasisError::InvalidConfiguration(
                "state dimension must be at least 1".to_string(),
            ));
        }

        if u32::try_from(self.order).is_err() {
            return Err(BasisError::InvalidConfiguration(format!(
                "order {} exceeds the coefficient range",
                self.order
            )));
        }

        let too_large = || {
            BasisError::InvalidConfiguration(format!(
                "basis of order {} over {} dimensions is too large",
                self.order, self.features
            ))
        };

        let exponent = u32::try_from(self.features).map_err(|_| too_large())?;
        let num_features = self
            .order
            .checked_add(1)
            .and_then(|width| width.checked_pow(exponent))
            .ok_or_else(too_large)?;

        // The f64 frequency matrix holds k * (n+1)^k entries and must stay
        // within isize::MAX bytes
        let bytes = num_features
            .checked_mul(self.features)
            .and_then(|entries| entries.checked_mul(size_of::<f64>()))
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as usize {
            return Err(too_large());
        }

        Ok(num_features)
    }
}

impl TryFrom<(i64, i64)> for BasisConfig {
    type Error = BasisError;

    /// Build a config from signed integers, rejecting `k < 1` and `n < 0`
    fn try_from((features, order): (i64, i64)) -> Result<Self> {
        let features = usize::try_from(features)
            .ok()
            .filter(|&k| k >= 1)
            .ok_or_else(|| {
                BasisError::InvalidConfiguration(format!(
                    "state dimension must be at least 1, got {features}"
                ))
            })?;

        let order = usize::try_from(order).map_err(|_| {
            BasisError::InvalidConfiguration(format!(
                "order must be non-negative, got {order}"
            ))
        })?;

        Ok(Self { features, order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BasisConfig::default();
        assert_eq!(config.validate(), Ok(4));
    }

    #[test]
    fn test_feature_count() {
        assert_eq!(BasisConfig::new(2, 1).validate(), Ok(4));
        assert_eq!(BasisConfig::new(3, 2).validate(), Ok(27));
        assert_eq!(BasisConfig::new(4, 0).validate(), Ok(1));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = BasisConfig::new(0, 3).validate().unwrap_err();
        assert!(matches!(err, BasisError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_overflowing_basis_rejected() {
        assert!(BasisConfig::new(64, 3).validate().is_err());
        assert!(BasisConfig::new(2, usize::MAX).validate().is_err());
        // Entry counts fit a usize but the byte size does not
        assert!(matches!(
            BasisConfig::new(58, 1).validate(),
            Err(BasisError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BasisConfig::new(29, 3).validate(),
            Err(BasisError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_signed_conversion() {
        assert_eq!(
            BasisConfig::try_from((2_i64, 3_i64)),
            Ok(BasisConfig::new(2, 3))
        );
        assert!(matches!(
            BasisConfig::try_from((2_i64, -1_i64)),
            Err(BasisError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BasisConfig::try_from((0_i64, 1_i64)),
            Err(BasisError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BasisConfig::try_from((-3_i64, 1_i64)),
            Err(BasisError::InvalidConfiguration(_))
        ));
    }
}
