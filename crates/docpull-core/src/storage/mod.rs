//! Disk I/O for fetched documents.
//!
//! Each document is written to `<name>.part` and renamed over `<name>`, so an
//! interrupted write never leaves a truncated page under the final name.

mod writer;

pub use writer::DocumentWriter;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetcher::FetchedDocument;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `index.html` → `index.html.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create `dir` and its parents if missing. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))
}

/// Write `doc.body` to `dir/doc.filename`, replacing any existing file. Returns the final path.
pub fn save_document(dir: &Path, doc: &FetchedDocument) -> Result<PathBuf> {
    let final_path = dir.join(&doc.filename);
    let mut writer = DocumentWriter::create(&temp_path(&final_path))?;
    writer.write_all(&doc.body)?;
    writer.finalize(&final_path)?;
    Ok(final_path)
}
