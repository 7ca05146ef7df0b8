//! Fourier Basis Expander

use crate::coefficients;
use crate::config::BasisConfig;
use crate::error::{BasisError, Result};
use ndarray::linalg::general_mat_mul;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, trace, warn};

/// Bases with more functions than this are logged as a warning when built
pub const LARGE_BASIS_WARN_THRESHOLD: usize = 1_000_000;

/// Fourier basis over `k`-dimensional states in `[0, 1]^k`.
///
/// Feature `i` of a state `s` is `cos(π · s · cᵢ)`, where `cᵢ` is column `i`
/// of the coefficient matrix. The matrix is built once and never changes, so
/// a basis can be shared freely between threads.
///
/// Serializes as its [`BasisConfig`]; deserializing rebuilds the
/// coefficients and rejects invalid configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BasisConfig", into = "BasisConfig")]
pub struct FourierBasis {
    config: BasisConfig,
    /// Integer frequencies, `k × (n+1)^k`
    coefficients: Array2<u32>,
    /// `π · coefficients`, the right-hand side of the batch product
    frequencies: Array2<f64>,
}

impl FourierBasis {
    /// Create a basis of the given order over `features` state dimensions
    pub fn new(features: usize, order: usize) -> Result<Self> {
        Self::from_config(BasisConfig::new(features, order))
    }

    /// Create a basis from a config
    pub fn from_config(config: BasisConfig) -> Result<Self> {
        let num_features = config.validate()?;

        if num_features > LARGE_BASIS_WARN_THRESHOLD {
            warn!(
                "Fourier basis of order {} over {} dimensions has {} functions",
                config.order, config.features, num_features
            );
        }

        let coefficients = coefficients::enumerate(&config, num_features);
        let frequencies = coefficients.mapv(|c| f64::from(c) * PI);

        debug!(
            "Built Fourier basis: k={}, n={}, {} features",
            config.features, config.order, num_features
        );

        Ok(Self {
            config,
            coefficients,
            frequencies,
        })
    }

    /// Configuration this basis was built from
    pub fn config(&self) -> BasisConfig {
        self.config
    }

    /// State dimensionality `k`
    pub fn features(&self) -> usize {
        self.config.features
    }

    /// Basis order `n`
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Number of output features, `(n+1)^k`
    pub fn num_features(&self) -> usize {
        self.coefficients.ncols()
    }

    /// The `k × (n+1)^k` coefficient matrix
    pub fn coefficients(&self) -> ArrayView2<'_, u32> {
        self.coefficients.view()
    }

    /// Frequency tuple behind feature `index`
    pub fn coefficient(&self, index: usize) -> Option<ArrayView1<'_, u32>> {
        (index < self.num_features()).then(|| self.coefficients.column(index))
    }

    /// Map an `m × k` batch of states to an `m × (n+1)^k` feature matrix.
    ///
    /// States are expected to lie in `[0, 1]^k`. Values outside that range
    /// are not rejected and still produce finite features in `[-1, 1]`, but
    /// the basis is only orthogonal over the unit cube; keeping states in
    /// range is up to the caller.
    pub fn apply(&self, states: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.check_states(&states)?;

        let mut features = states.dot(&self.frequencies);
        features.mapv_inplace(f64::cos);

        trace!("Applied Fourier basis to {} states", states.nrows());
        Ok(features)
    }

    /// Like [`apply`](Self::apply), but writes into `out`, which must be
    /// `m × (n+1)^k`. On error `out` is left untouched.
    pub fn apply_into(
        &self,
        states: ArrayView2<'_, f64>,
        mut out: ArrayViewMut2<'_, f64>,
    ) -> Result<()> {
        self.check_states(&states)?;

        if out.nrows() != states.nrows() {
            return Err(BasisError::DimensionMismatch {
                expected: states.nrows(),
                actual: out.nrows(),
            });
        }
        if out.ncols() != self.num_features() {
            return Err(BasisError::DimensionMismatch {
                expected: self.num_features(),
                actual: out.ncols(),
            });
        }

        general_mat_mul(1.0, &states, &self.frequencies, 0.0, &mut out);
        out.mapv_inplace(f64::cos);

        trace!("Applied Fourier basis to {} states in place", states.nrows());
        Ok(())
    }

    /// Map a single state of length `k` to its feature vector
    pub fn apply_one(&self, state: &[f64]) -> Result<Array1<f64>> {
        if state.len() != self.features() {
            return Err(BasisError::DimensionMismatch {
                expected: self.features(),
                actual: state.len(),
            });
        }

        let mut features = ArrayView1::from(state).dot(&self.frequencies);
        features.mapv_inplace(f64::cos);
        Ok(features)
    }

    fn check_states(&self, states: &ArrayView2<'_, f64>) -> Result<()> {
        if states.ncols() != self.features() {
            return Err(BasisError::DimensionMismatch {
                expected: self.features(),
                actual: states.ncols(),
            });
        }
        Ok(())
    }
}

impl TryFrom<BasisConfig> for FourierBasis {
    type Error = BasisError;

    fn try_from(config: BasisConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl TryFrom<(i64, i64)> for FourierBasis {
    type Error = BasisError;

    fn try_from(params: (i64, i64)) -> Result<Self> {
        Self::from_config(BasisConfig::try_from(params)?)
    }
}

impl From<FourierBasis> for BasisConfig {
    fn from(basis: FourierBasis) -> Self {
        basis.config
    }
}
