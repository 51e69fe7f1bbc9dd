use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Offsets, load_offsets};
use crate::error::Result;

/// Source of the module-relative offsets for the running game version.
///
/// Resolution is re-triggered whenever the unit table offset reads as zero,
/// so implementations should be cheap to call more than once.
pub trait OffsetResolver {
    fn resolve(&self) -> Result<Offsets>;
}

/// A fixed offset set resolves to itself
impl OffsetResolver for Offsets {
    fn resolve(&self) -> Result<Offsets> {
        Ok(self.clone())
    }
}

/// Resolves offsets by (re-)reading a JSON offsets file
#[derive(Debug, Clone)]
pub struct FileOffsetResolver {
    path: PathBuf,
}

impl FileOffsetResolver {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OffsetResolver for FileOffsetResolver {
    fn resolve(&self) -> Result<Offsets> {
        let offsets = load_offsets(&self.path)?;
        debug!(
            "Resolved offsets from {} (version: {})",
            self.path.display(),
            offsets.version
        );
        Ok(offsets)
    }
}
