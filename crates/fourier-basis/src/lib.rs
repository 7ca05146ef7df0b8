//! Fourier Basis Features
//!
//! Expands low-dimensional states in `[0, 1]^k` into the `(n+1)^k` cosine
//! features of an order-`n` Fourier basis, for linear value-function
//! approximation.
//!
//! ```
//! use fourier_basis::FourierBasis;
//! use ndarray::array;
//!
//! let basis = FourierBasis::new(2, 1)?;
//! let features = basis.apply(array![[0.0, 0.0]].view())?;
//! assert_eq!(features.dim(), (1, 4));
//! # Ok::<(), fourier_basis::BasisError>(())
//! ```

mod basis;
mod coefficients;
mod config;
mod error;

pub use basis::{FourierBasis, LARGE_BASIS_WARN_THRESHOLD};
pub use coefficients::coefficient_matrix;
pub use config::BasisConfig;
pub use error::{BasisError, Result};
