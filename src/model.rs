//! Linear regression exported by the training pipeline.

use std::fmt::{Display, Formatter};

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

pub mod artifact;
pub mod format;

/// Weights, either a single row or one row per target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficients {
    Single(Vec<f64>),
    Multi(Vec<Vec<f64>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Intercept {
    /// Shared by every target.
    Scalar(f64),

    Vector(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub coef: Coefficients,
    pub intercept: Intercept,

    /// Feature count the model was fit on, if the exporter recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_features_in: Option<usize>,
}

impl LinearRegression {
    #[must_use]
    pub fn n_features(&self) -> usize {
        match &self.coef {
            Coefficients::Single(weights) => weights.len(),
            Coefficients::Multi(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    #[must_use]
    pub fn n_targets(&self) -> usize {
        match &self.coef {
            Coefficients::Single(_) => 1,
            Coefficients::Multi(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_multi_output(&self) -> bool {
        matches!(self.coef, Coefficients::Multi(_))
    }

    /// Checks that the parameters describe a consistent model.
    pub fn validate(&self) -> Result<(), String> {
        let n_features = self.n_features();
        if n_features == 0 {
            return Err("the model has no coefficients".to_string());
        }
        if let Coefficients::Multi(rows) = &self.coef {
            if let Some(index) = rows.iter().position(|row| row.len() != n_features) {
                return Err(format!(
                    "coefficient row #{} has {} weights, expected {}",
                    index,
                    rows[index].len(),
                    n_features,
                ));
            }
        }
        if let Intercept::Vector(intercept) = &self.intercept {
            if intercept.len() != self.n_targets() {
                return Err(format!(
                    "{} intercepts for {} targets",
                    intercept.len(),
                    self.n_targets(),
                ));
            }
        }
        if let Some(n_features_in) = self.n_features_in.filter(|n| *n != n_features) {
            return Err(format!(
                "fit on {} features but has {} weights",
                n_features_in, n_features,
            ));
        }
        if !self.weights().iter().chain(&self.intercepts()).all(|x| x.is_finite()) {
            return Err("non-finite parameter".to_string());
        }
        Ok(())
    }

    /// Computes `x · coefᵀ + intercept`, one output row per input row.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::ShapeMismatch {
                expected: self.n_features(),
                actual: x.ncols(),
            });
        }
        Ok(x.dot(&self.weights().t()) + &self.intercepts())
    }

    /// `n_targets × n_features` weight matrix.
    fn weights(&self) -> Array2<f64> {
        let shape = (self.n_targets(), self.n_features());
        match &self.coef {
            Coefficients::Single(weights) => Array2::from_shape_fn(shape, |(_, j)| weights[j]),
            Coefficients::Multi(rows) => Array2::from_shape_fn(shape, |(i, j)| rows[i][j]),
        }
    }

    fn intercepts(&self) -> Array1<f64> {
        match &self.intercept {
            Intercept::Scalar(intercept) => Array1::from_elem(self.n_targets(), *intercept),
            Intercept::Vector(intercept) => Array1::from_vec(intercept.clone()),
        }
    }
}

/// Model output for a single sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Prediction {
    #[must_use]
    pub fn new(output: ArrayView1<f64>, is_multi_output: bool) -> Self {
        match (is_multi_output, output.iter().next()) {
            (false, Some(value)) => Self::Scalar(*value),
            _ => Self::Vector(output.to_vec()),
        }
    }
}

impl Display for Prediction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(value) => write!(formatter, "{}", value),
            Self::Vector(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i != 0 {
                        formatter.write_str(" ")?;
                    }
                    write!(formatter, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}
