use std::io;
use std::path::PathBuf;

/// Failures of the prediction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("failed to read the model artifact `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to deserialize the model artifact `{}`: {reason}", path.display())]
    Deserialize { path: PathBuf, reason: String },

    /// The row norm is zero, so the row cannot be rescaled.
    #[error("row #{row} has zero norm")]
    ZeroNorm { row: usize },

    #[error("row #{row} has a non-finite norm")]
    NonFiniteNorm { row: usize },

    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("the input matrix is empty")]
    EmptyInput,
}
