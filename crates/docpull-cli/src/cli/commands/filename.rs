//! `docpull filename <url>...` – show derived filenames without fetching.

use docpull_core::url_model::derive_filename;

pub fn run_filename(urls: &[String]) {
    for url in urls {
        println!("{}\t{}", derive_filename(url), url);
    }
}
