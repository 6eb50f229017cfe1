//! Headless Chrome backend for [`PageDriver`], via the `headless_chrome` crate.

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

use super::{CollectError, PageDriver, PageSession};

/// Launches a local Chrome/Chromium per session.
#[derive(Debug, Clone)]
pub struct ChromeDriver {
    headless: bool,
}

impl ChromeDriver {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }
}

impl PageDriver for ChromeDriver {
    type Session = ChromeSession;

    fn open(&self) -> Result<ChromeSession, CollectError> {
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .build()
            .map_err(|e| CollectError::browser("configure", e))?;
        let browser = Browser::new(options).map_err(|e| CollectError::browser("launch", e))?;
        let tab = browser
            .new_tab()
            .map_err(|e| CollectError::browser("open tab", e))?;
        tracing::debug!(headless = self.headless, "chrome launched");
        Ok(ChromeSession {
            tab,
            _browser: browser,
            closed: false,
        })
    }
}

/// One tab in a dedicated Chrome process. The process is killed when the
/// session is dropped.
pub struct ChromeSession {
    // Declared before the browser so the tab is released first.
    tab: Arc<Tab>,
    _browser: Browser,
    closed: bool,
}

impl PageSession for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<(), CollectError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map(|_| ())
            .map_err(|e| CollectError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> Result<(), CollectError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|e| CollectError::ElementTimeout {
                selector: selector.to_string(),
                timeout_secs: timeout.as_secs(),
                message: e.to_string(),
            })
    }

    fn current_url(&mut self) -> Option<String> {
        let url = self.tab.get_url();
        (!url.is_empty()).then_some(url)
    }

    fn descendant_attribute(
        &mut self,
        container_id: &str,
        tag: &str,
        attribute: &str,
    ) -> Result<Vec<Option<String>>, CollectError> {
        let script = attribute_script(container_id, tag, attribute)?;
        let result = self
            .tab
            .evaluate(&script, false)
            .map_err(|e| CollectError::browser("evaluate", e))?;
        let json = match result.value {
            Some(serde_json::Value::String(s)) => s,
            other => {
                return Err(CollectError::browser(
                    "evaluate",
                    format!("unexpected script result: {:?}", other),
                ))
            }
        };
        let values: Option<Vec<Option<String>>> =
            serde_json::from_str(&json).map_err(|e| CollectError::browser("decode", e))?;
        values.ok_or_else(|| {
            CollectError::browser("query", format!("no element with id `{}`", container_id))
        })
    }

    fn close(mut self) -> Result<(), CollectError> {
        self.closed = true;
        self.tab
            .close(true)
            .map(|_| ())
            .map_err(|e| CollectError::browser("close", e))
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.tab.close(true);
        }
        tracing::debug!("chrome session released");
    }
}

/// In-page script returning, as a JSON string, the attribute values of every
/// `tag` under `#container_id` in document order (`null` if the container is gone).
fn attribute_script(container_id: &str, tag: &str, attribute: &str) -> Result<String, CollectError> {
    let quote = |s: &str| serde_json::to_string(s).map_err(|e| CollectError::browser("encode", e));
    Ok(format!(
        "(() => {{ \
           const root = document.getElementById({id}); \
           if (!root) return JSON.stringify(null); \
           return JSON.stringify(Array.from(root.getElementsByTagName({tag}), el => el.getAttribute({attr}))); \
         }})()",
        id = quote(container_id)?,
        tag = quote(tag)?,
        attr = quote(attribute)?,
    ))
}
