//! URL modeling and filename derivation.
//!
//! Derives the local filename a fetched page is saved under. Only the final
//! segment of the percent-decoded URL path is used; host, query and fragment
//! never contribute, so distinct URLs can map to the same file.

mod path;
mod percent;

pub use path::{final_path_segment, url_path};
pub use percent::percent_decode;

/// Name used when the URL path has no final segment (e.g. `https://x.com/docs/`).
pub const INDEX_NAME: &str = "index";

/// Extension appended to every derived filename.
pub const HTML_EXTENSION: &str = ".html";

/// Derives the filename a fetched page is written to.
///
/// 1. Percent-decode the URL's path component.
/// 2. Take the substring after the last `/`.
/// 3. If that is empty (or a bare `/`), use `index`.
/// 4. Append `.html`.
///
/// # Examples
///
/// - `derive_filename("https://x.com/docs/Guide%20One")` → `"Guide One.html"`
/// - `derive_filename("https://x.com/docs/")` → `"index.html"`
pub fn derive_filename(url: &str) -> String {
    let decoded = percent_decode(&url_path(url));
    let segment = final_path_segment(&decoded);
    let stem = if segment.is_empty() || segment == "/" {
        INDEX_NAME
    } else {
        segment
    };
    format!("{stem}{HTML_EXTENSION}")
}
