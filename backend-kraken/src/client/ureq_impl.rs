use std::time::Duration;

use livescope_core::{Error, Next, Progress, Result};

use super::body::read_body;
use super::http_trait::{HttpClient, HttpRequest, HttpResponse};

/// Minimal HTTP client implementation using ureq.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use backend_kraken::{Config, KrakenClient, UreqClient};
///
/// let client = KrakenClient::new(Arc::new(Config::default()), UreqClient::new());
/// let streams = client.query_streams("speedrun")?;
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    ///
    /// Request timeouts come from each request's `Config`.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Create a new ureq HTTP client with an agent-wide timeout on top of the
    /// per-request one.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(timeout_secs))
                .build(),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(
        &self,
        request: &HttpRequest<'_>,
        progress: &dyn Fn(&Progress) -> Next,
    ) -> Result<HttpResponse> {
        if progress(&Progress::default()) == Next::Abort {
            return Err(Error::Cancelled);
        }

        let mut req = self
            .agent
            .get(request.url.as_str())
            .set("User-Agent", request.user_agent);
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        // ureq reports 4xx/5xx as errors, but they still carry a response
        let response = match req.call() {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(Error::Transport(format!("HTTP GET request failed: {e}"))),
        };

        let status = response.status();
        let content_length = response
            .header("Content-Length")
            .and_then(|len| len.parse().ok());
        let body = read_body(response.into_reader(), content_length, progress)?;

        Ok(HttpResponse { status, body })
    }
}
