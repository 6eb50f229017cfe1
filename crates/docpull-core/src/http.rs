//! Blocking HTTP GET over libcurl.
//!
//! Returns the final status code and full body after redirects. Status
//! interpretation is left to the caller; only transport failures are errors.

use std::collections::BTreeMap;
use std::time::Duration;

/// Per-request settings for [`get`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpOptions {
    pub user_agent: String,
    /// Extra request headers, sent as `Name: value`.
    pub headers: BTreeMap<String, String>,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            user_agent: crate::config::DEFAULT_USER_AGENT.to_string(),
            headers: BTreeMap::new(),
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(300),
            max_redirections: 10,
        }
    }
}

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// 2xx and 3xx count as success; redirects are normally followed before this is seen.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// Performs a GET request and buffers the whole body.
///
/// Runs in the current thread.
pub fn get(url: &str, opts: &HttpOptions) -> Result<HttpResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.accept_encoding("")?;

    let mut list = curl::easy::List::new();
    list.append(&format!("User-Agent: {}", opts.user_agent.trim()))?;
    for (k, v) in &opts.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    Ok(HttpResponse { status, body })
}
