//! Line-delimited URL list files shared by `collect` and `fetch`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Parses a URL list: one URL per line, surrounding whitespace trimmed,
/// blank lines dropped, order kept.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads and parses the URL list at `path`.
pub fn read_url_list(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_url_list(&text))
}

/// Truncates `path` and writes each URL followed by `\n`.
pub fn write_url_list<S: AsRef<str>>(path: &Path, urls: &[S]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    for url in urls {
        out.write_all(url.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
