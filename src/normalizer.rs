//! Row-wise rescaling to unit norm.
//!
//! Fitting is stateless apart from remembering the column count:
//! every row is rescaled by its own norm, so fitting on the very row
//! being transformed is equivalent to fitting on anything else of that width.

use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::error::PredictError;
use crate::math::vector::{l1_norm, max_norm, norm};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Norm {
    L1,

    #[default]
    L2,

    Max,
}

impl Norm {
    #[must_use]
    pub fn of(self, x: &[f64]) -> f64 {
        match self {
            Self::L1 => l1_norm(x),
            Self::L2 => norm(x),
            Self::Max => max_norm(x),
        }
    }
}

impl Display for Norm {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::Max => "max",
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer {
    norm: Norm,
}

impl Normalizer {
    #[must_use]
    pub const fn new(norm: Norm) -> Self {
        Self { norm }
    }

    pub fn fit(self, x: &Array2<f64>) -> Result<FittedNormalizer, PredictError> {
        if x.is_empty() {
            return Err(PredictError::EmptyInput);
        }
        Ok(FittedNormalizer {
            norm: self.norm,
            n_features: x.ncols(),
        })
    }

    pub fn fit_transform(self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        self.fit(x)?.transform(x)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FittedNormalizer {
    norm: Norm,
    n_features: usize,
}

impl FittedNormalizer {
    /// Divides every row by its norm.
    ///
    /// A row with zero or non-finite norm is an error rather than being passed through.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        if x.ncols() != self.n_features {
            return Err(PredictError::ShapeMismatch {
                expected: self.n_features,
                actual: x.ncols(),
            });
        }
        let mut output = x.to_owned();
        for (row_index, mut row) in output.rows_mut().into_iter().enumerate() {
            let norm = self.norm.of(&row.to_vec());
            if !norm.is_finite() {
                return Err(PredictError::NonFiniteNorm { row: row_index });
            }
            if norm == 0.0 {
                return Err(PredictError::ZeroNorm { row: row_index });
            }
            row.mapv_inplace(|xi| xi / norm);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn l2_ok() -> crate::Result {
        let normalized = Normalizer::default().fit_transform(&array![[1.0, 2.0, 3.0, 4.0]])?;
        let expected = [
            0.18257418583505536,
            0.3651483716701107,
            0.5477225575051661,
            0.7302967433402214,
        ];
        for (actual, expected) in normalized.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-15, "{} != {}", actual, expected);
        }
        Ok(())
    }

    #[test]
    fn l1_ok() -> crate::Result {
        let normalized = Normalizer::new(Norm::L1).fit_transform(&array![[1.0, -1.0, 2.0, 0.0]])?;
        assert_eq!(normalized, array![[0.25, -0.25, 0.5, 0.0]]);
        Ok(())
    }

    #[test]
    fn max_ok() -> crate::Result {
        let normalized = Normalizer::new(Norm::Max).fit_transform(&array![[2.0, -8.0, 4.0, 1.0]])?;
        assert_eq!(normalized, array![[0.25, -1.0, 0.5, 0.125]]);
        Ok(())
    }

    #[test]
    fn rows_are_independent() -> crate::Result {
        let normalized = Normalizer::default().fit_transform(&array![[3.0, 4.0], [0.0, 2.0]])?;
        assert_eq!(normalized, array![[0.6, 0.8], [0.0, 1.0]]);
        Ok(())
    }

    #[test]
    fn extreme_magnitudes_ok() -> crate::Result {
        for k in [1e-170, 1e-160, 1e160] {
            let row = array![[k, 2.0 * k, 3.0 * k, 4.0 * k]];
            let normalized = Normalizer::default().fit_transform(&row)?;
            for (i, actual) in normalized.iter().enumerate() {
                let expected = (i + 1) as f64 / 30.0_f64.sqrt();
                assert!((actual - expected).abs() < 1e-12, "k = {}: {} != {}", k, actual, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn zero_row_fails() {
        let result = Normalizer::default().fit_transform(&array![[1.0, 1.0], [0.0, 0.0]]);
        assert!(matches!(result, Err(PredictError::ZeroNorm { row: 1 })));
    }

    #[test]
    fn non_finite_row_fails() {
        let result = Normalizer::default().fit_transform(&array![[f64::NAN, 1.0]]);
        assert!(matches!(result, Err(PredictError::NonFiniteNorm { row: 0 })));
        let result = Normalizer::new(Norm::L1).fit_transform(&array![[f64::INFINITY, 1.0]]);
        assert!(matches!(result, Err(PredictError::NonFiniteNorm { row: 0 })));
    }

    #[test]
    fn empty_input_fails() {
        let result = Normalizer::default().fit(&Array2::zeros((0, 4)));
        assert!(matches!(result, Err(PredictError::EmptyInput)));
    }

    #[test]
    fn transform_checks_width() -> crate::Result {
        let normalizer = Normalizer::default().fit(&array![[1.0, 2.0, 3.0, 4.0]])?;
        let result = normalizer.transform(&array![[1.0, 2.0]]);
        assert!(matches!(
            result,
            Err(PredictError::ShapeMismatch {
                expected: 4,
                actual: 2
            })
        ));
        Ok(())
    }
}
