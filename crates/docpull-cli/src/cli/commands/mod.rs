//! CLI command handlers, one per file.

mod collect;
mod fetch;
mod filename;

pub use collect::{run_collect, CollectArgs};
pub use fetch::{run_fetch, FetchArgs};
pub use filename::run_filename;
