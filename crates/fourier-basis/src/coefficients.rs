//! Frequency Coefficient Enumeration

use crate::config::BasisConfig;
use crate::error::Result;
use ndarray::Array2;

/// Build the `k × (n+1)^k` coefficient matrix for `features` dimensions.
///
/// Column `j` holds the `j`-th tuple of `{0, ..., order}^features` in
/// lexicographic order: the first dimension varies slowest and the last
/// dimension varies fastest. Feature indices of a [`FourierBasis`] follow
/// this order, so it must not change.
///
/// [`FourierBasis`]: crate::FourierBasis
pub fn coefficient_matrix(features: usize, order: usize) -> Result<Array2<u32>> {
    let config = BasisConfig::new(features, order);
    let num_features = config.validate()?;
    Ok(enumerate(&config, num_features))
}

/// Odometer enumeration over a validated config
pub(crate) fn enumerate(config: &BasisConfig, num_features: usize) -> Array2<u32> {
    // validate() guarantees the order fits a u32
    let max_digit = config.order as u32;
    let mut coefficients = Array2::<u32>::zeros((config.features, num_features));
    let mut digits = vec![0u32; config.features];

    for mut column in coefficients.columns_mut() {
        for (slot, &digit) in column.iter_mut().zip(&digits) {
            *slot = digit;
        }

        // Advance, carrying from the last dimension towards the first
        for digit in digits.iter_mut().rev() {
            if *digit < max_digit {
                *digit += 1;
                break;
            }
            *digit = 0;
        }
    }

    coefficients
}
