//! Path extraction from URLs.

use std::borrow::Cow;

/// Returns the (still percent-encoded) path component of `url`.
///
/// Inputs that do not parse as absolute URLs are treated as bare paths: the
/// text up to the first `?` or `#`.
pub fn url_path(url: &str) -> Cow<'_, str> {
    match url::Url::parse(url) {
        Ok(parsed) => Cow::Owned(parsed.path().to_string()),
        Err(_) => {
            let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
            Cow::Borrowed(&url[..end])
        }
    }
}

/// Substring after the last `/`; the whole input when there is none.
pub fn final_path_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
