pub use std::path::{Path, PathBuf};
pub use std::time::Duration as StdDuration;

pub use anyhow::{anyhow, Context};
pub use tracing::{debug, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
