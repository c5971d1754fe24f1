//! Reading the model artifact from disk.

use std::fs::File;
use std::io::Read;

use crate::error::PredictError;
use crate::helpers::time::Instant;
use crate::model::format::ArtifactFormat;
use crate::model::LinearRegression;
use crate::prelude::*;

pub struct Artifact {
    pub format: ArtifactFormat,
    pub model: LinearRegression,
}

/// Reads, decodes, and validates the artifact.
#[instrument(skip_all, fields(path = ?path))]
pub fn load(path: &Path) -> Result<Artifact, PredictError> {
    let start_instant = Instant::now();
    let bytes = read_artifact(path)?;

    let deserialize_error = |reason: String| PredictError::Deserialize {
        path: path.to_path_buf(),
        reason,
    };
    let format = ArtifactFormat::detect(path, &bytes)
        .ok_or_else(|| deserialize_error("unrecognized artifact format".to_string()))?;
    let model = format.decode(&bytes).map_err(deserialize_error)?;
    model.validate().map_err(deserialize_error)?;

    debug!(
        %format,
        n_features = model.n_features(),
        n_targets = model.n_targets(),
        elapsed = %start_instant.elapsed(),
        "loaded"
    );
    Ok(Artifact { format, model })
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, PredictError> {
    let io_error = |source: std::io::Error| PredictError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(io_error)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(io_error)?;
    Ok(buffer)
}
