use std::fmt::{Display, Formatter};
use std::path::Path;

use serde_pickle::DeOptions;

use crate::model::LinearRegression;

/// First byte of a pickle stream of protocol 2 and above.
const PICKLE_PROTO: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Pickle,
    Json,
}

impl ArtifactFormat {
    /// Picks the format by the file extension, falling back to the leading byte.
    #[must_use]
    pub fn detect(path: &Path, bytes: &[u8]) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pkl" | "pickle") => Some(Self::Pickle),
            Some("json") => Some(Self::Json),
            _ => Self::sniff(bytes),
        }
    }

    fn sniff(bytes: &[u8]) -> Option<Self> {
        match *bytes.iter().find(|byte| !byte.is_ascii_whitespace())? {
            PICKLE_PROTO => Some(Self::Pickle),
            b'{' => Some(Self::Json),
            _ => None,
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<LinearRegression, String> {
        match self {
            Self::Pickle => {
                serde_pickle::from_slice(bytes, DeOptions::new()).map_err(|error| error.to_string())
            }
            Self::Json => serde_json::from_slice(bytes).map_err(|error| error.to_string()),
        }
    }
}

impl Display for ArtifactFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Pickle => "pickle",
            Self::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coefficients, Intercept};

    fn detect(path: &str, bytes: &[u8]) -> Option<ArtifactFormat> {
        ArtifactFormat::detect(Path::new(path), bytes)
    }

    #[test]
    fn detect_by_extension() {
        assert_eq!(detect("model.pkl", b"{"), Some(ArtifactFormat::Pickle));
        assert_eq!(detect("model.PICKLE", b""), Some(ArtifactFormat::Pickle));
        assert_eq!(detect("model.json", b"\x80"), Some(ArtifactFormat::Json));
    }

    #[test]
    fn detect_by_content() {
        assert_eq!(detect("model", b"\x80\x03}q\x00."), Some(ArtifactFormat::Pickle));
        assert_eq!(detect("model.bin", b"  {\"coef\": []}"), Some(ArtifactFormat::Json));
        assert_eq!(detect("model.bin", b"garbage"), None);
        assert_eq!(detect("model", b""), None);
    }

    #[test]
    fn decode_pickle_ok() -> crate::Result {
        let model = LinearRegression {
            coef: Coefficients::Single(vec![1.0, 2.0]),
            intercept: Intercept::Scalar(-1.0),
            n_features_in: Some(2),
        };
        let bytes = serde_pickle::to_vec(&model, Default::default())?;
        assert_eq!(ArtifactFormat::Pickle.decode(&bytes), Ok(model));
        Ok(())
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(ArtifactFormat::Pickle.decode(b"\x80\x03garbage").is_err());
        assert!(ArtifactFormat::Json.decode(br#"{"coef": "nope"}"#).is_err());
    }
}
