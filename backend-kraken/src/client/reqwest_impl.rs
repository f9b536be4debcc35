use std::time::Duration;

use livescope_core::{Error, Next, Progress, Result};
use reqwest::header::USER_AGENT;

use super::body::read_body;
use super::http_trait::{HttpClient, HttpRequest, HttpResponse};

/// HTTP client implementation using reqwest's blocking API.
///
/// Worth it when the host already links reqwest; otherwise prefer
/// `UreqClient`, which is much lighter.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Result<Self> {
        Self::build(reqwest::blocking::Client::builder())
    }

    /// Create a new reqwest HTTP client with a client-wide timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        Self::build(reqwest::blocking::Client::builder().timeout(Duration::from_secs(timeout_secs)))
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    fn build(builder: reqwest::blocking::ClientBuilder) -> Result<Self> {
        let client = builder
            .build()
            .map_err(|e| Error::Transport(format!("failed to build reqwest client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(
        &self,
        request: &HttpRequest<'_>,
        progress: &dyn Fn(&Progress) -> Next,
    ) -> Result<HttpResponse> {
        if progress(&Progress::default()) == Next::Abort {
            return Err(Error::Cancelled);
        }

        let mut req = self
            .client
            .get(request.url.as_str())
            .header(USER_AGENT, request.user_agent);
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        let response = req
            .send()
            .map_err(|e| Error::Transport(format!("HTTP GET request failed: {e}")))?;

        let status = response.status().as_u16();
        let content_length = response.content_length();
        let body = read_body(response, content_length, progress)?;

        Ok(HttpResponse { status, body })
    }
}
