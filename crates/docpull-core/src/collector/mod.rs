//! Link collector: open the navigation page in a browser and list the hrefs of
//! every anchor inside the container element.
//!
//! The browser is reached only through [`PageDriver`] / [`PageSession`], so
//! the procedure does not depend on a particular automation backend.

mod chrome;
mod error;

pub use chrome::{ChromeDriver, ChromeSession};
pub use error::CollectError;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::CollectorConfig;
use crate::url_list;

const ANCHOR_TAG: &str = "a";
const HREF_ATTRIBUTE: &str = "href";

/// Starts browser sessions.
pub trait PageDriver {
    type Session: PageSession;

    fn open(&self) -> Result<Self::Session, CollectError>;
}

/// One open browser page. Dropping a session must release the browser.
pub trait PageSession {
    /// Load `url` and wait for navigation to finish.
    fn navigate(&mut self, url: &str) -> Result<(), CollectError>;

    /// Block until an element matching the CSS `selector` exists, or fail after `timeout`.
    fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> Result<(), CollectError>;

    /// URL of the loaded document (after redirects).
    fn current_url(&mut self) -> Option<String>;

    /// `attribute` of every `tag` element nested in the element with id
    /// `container_id`, in document order. `None` where the attribute is absent.
    fn descendant_attribute(
        &mut self,
        container_id: &str,
        tag: &str,
        attribute: &str,
    ) -> Result<Vec<Option<String>>, CollectError>;

    /// Close the page and release the browser.
    fn close(self) -> Result<(), CollectError>
    where
        Self: Sized;
}

/// What a successful `collect` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectReport {
    pub urls: Vec<String>,
    pub output_file: PathBuf,
}

/// CSS selector matching the element with the given id.
pub fn id_selector(id: &str) -> String {
    format!("#{id}")
}

/// Drops missing hrefs and resolves the rest against `base`, keeping order.
///
/// Values that cannot be resolved are kept as written.
pub fn resolve_hrefs(base: &str, hrefs: Vec<Option<String>>) -> Vec<String> {
    let base = url::Url::parse(base).ok();
    hrefs
        .into_iter()
        .flatten()
        .map(|href| match base.as_ref().and_then(|b| b.join(&href).ok()) {
            Some(resolved) => resolved.to_string(),
            None => href,
        })
        .collect()
}

/// Open the configured page and return the anchor hrefs inside the container.
///
/// The session is closed on success and dropped (which also releases the
/// browser) on every error path.
pub fn collect_links<D: PageDriver>(
    driver: &D,
    cfg: &CollectorConfig,
) -> Result<Vec<String>, CollectError> {
    let mut session = driver.open()?;
    tracing::debug!(url = %cfg.page_url, "navigating");
    session.navigate(&cfg.page_url)?;

    let selector = id_selector(&cfg.container_id);
    session.wait_for_element(&selector, cfg.wait_timeout())?;

    let hrefs = session.descendant_attribute(&cfg.container_id, ANCHOR_TAG, HREF_ATTRIBUTE)?;
    let anchors = hrefs.len();
    let base = session
        .current_url()
        .unwrap_or_else(|| cfg.page_url.clone());

    if let Err(e) = session.close() {
        tracing::warn!("closing browser session failed: {}", e);
    }

    let urls = resolve_hrefs(&base, hrefs);
    tracing::debug!(anchors, with_href = urls.len(), "collected anchors");
    Ok(urls)
}

/// Collect links and write them to `cfg.output_file`, one per line.
pub fn run_collect<D: PageDriver>(
    driver: &D,
    cfg: &CollectorConfig,
) -> Result<CollectReport, CollectError> {
    let urls = collect_links(driver, cfg)?;
    url_list::write_url_list(&cfg.output_file, urls.as_slice()).map_err(|source| {
        CollectError::Output {
            path: cfg.output_file.clone(),
            source,
        }
    })?;
    tracing::info!(
        count = urls.len(),
        file = %cfg.output_file.display(),
        "wrote URL list"
    );
    Ok(CollectReport {
        urls,
        output_file: cfg.output_file.clone(),
    })
}
