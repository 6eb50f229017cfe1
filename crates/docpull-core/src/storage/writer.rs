//! Temp-file writer for a single fetched document.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a document to its `.part` file; `finalize` renames it into place.
/// Dropping without finalizing removes the temp file.
pub struct DocumentWriter {
    file: Option<File>,
    temp_path: PathBuf,
    finalized: bool,
}

impl DocumentWriter {
    /// Create (or truncate) the temp file at `temp_path`.
    pub fn create(temp_path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(Self {
            file: Some(file),
            temp_path: temp_path.to_path_buf(),
            finalized: false,
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let file = self.file.as_mut().context("writer already finalized")?;
        file.write_all(data)
            .with_context(|| format!("write {}", self.temp_path.display()))?;
        Ok(())
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, close and rename the temp file over `final_path`, replacing any existing file.
    pub fn finalize(mut self, final_path: &Path) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().context("storage flush failed")?;
        }
        std::fs::rename(&self.temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                final_path.display()
            )
        })?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for DocumentWriter {
    fn drop(&mut self) {
        if !self.finalized {
            drop(self.file.take());
            let _ = std::fs::remove_file(&self.temp_path);
        }
    }
}
