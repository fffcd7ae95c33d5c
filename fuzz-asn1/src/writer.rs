//! Output directory handling
//!
//! Values are written verbatim: raw bytes, no transcoding, no trailing
//! newline. Any change to the bytes would corrupt the framing under test.

use fuzz_asn1_core::{EncodedValue, FuzzResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes encoded values into one output directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Create the output directory (and parents) if needed
    ///
    /// An existing directory is reused; files with the same name are
    /// overwritten.
    pub fn create(dir: impl Into<PathBuf>) -> FuzzResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::debug!("output directory ready: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one value to `<dir>/<file_name>` and return the path
    pub fn write(&self, file_name: &str, value: &EncodedValue) -> FuzzResult<PathBuf> {
        let path = self.dir.join(file_name);
        let mut file = File::create(&path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(path)
    }
}
