use ndarray::Array2;

use crate::error::PredictError;
use crate::normalizer::Normalizer;

/// Number of features the pipeline feeds to a model.
pub const N_FEATURES: usize = 4;

/// Ordered model inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; N_FEATURES]);

impl FeatureVector {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self([a, b, c, d])
    }

    /// Builds the single-row `1 × 4` feature matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, N_FEATURES), |(_, j)| self.0[j])
    }

    /// Fits the normalizer on this very row and rescales it.
    pub fn normalize(&self, normalizer: Normalizer) -> Result<Array2<f64>, PredictError> {
        normalizer.fit_transform(&self.to_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_matrix_keeps_order() {
        let matrix = FeatureVector::new(1.0, 2.0, 3.0, 4.0).to_matrix();
        assert_eq!(matrix.shape(), &[1, 4]);
        assert_eq!(matrix.row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn normalize_ok() -> crate::Result {
        let normalized = FeatureVector::new(0.0, -3.0, 0.0, 4.0).normalize(Normalizer::default())?;
        assert_eq!(normalized, ndarray::array![[0.0, -0.6, 0.0, 0.8]]);
        Ok(())
    }

    #[test]
    fn normalize_zero_fails() {
        let result = FeatureVector::new(0.0, 0.0, 0.0, 0.0).normalize(Normalizer::default());
        assert!(matches!(result, Err(PredictError::ZeroNorm { row: 0 })));
    }
}
