use ndarray::Array2;

use crate::error::PredictError;
use crate::features::FeatureVector;
use crate::model::artifact::{self, Artifact};
use crate::model::Prediction;
use crate::normalizer::{Norm, Normalizer};
use crate::prelude::*;

/// Runs the model artifact on a single self-normalized feature row.
///
/// The artifact is re-read on every call, nothing is cached between calls.
pub struct PredictionService {
    model_path: PathBuf,
    normalizer: Normalizer,
}

impl PredictionService {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            normalizer: Normalizer::default(),
        }
    }

    #[must_use]
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.normalizer = Normalizer::new(norm);
        self
    }

    pub fn load_model(&self) -> Result<Artifact, PredictError> {
        artifact::load(&self.model_path)
    }

    /// Fits the normalizer on the `[a, b, c, d]` row and rescales that same row.
    pub fn normalize(&self, a: f64, b: f64, c: f64, d: f64) -> Result<Array2<f64>, PredictError> {
        FeatureVector::new(a, b, c, d).normalize(self.normalizer)
    }

    #[instrument(skip_all, fields(model_path = ?self.model_path))]
    pub fn predict(&self, a: f64, b: f64, c: f64, d: f64) -> Result<Prediction, PredictError> {
        let Artifact { model, .. } = self.load_model()?;
        let x = self.normalize(a, b, c, d)?;
        debug!(?x, "normalized");
        let y = model.predict(&x)?;
        Ok(Prediction::new(y.row(0), model.is_multi_output()))
    }
}
