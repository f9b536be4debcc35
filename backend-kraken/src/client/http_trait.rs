use std::time::Duration;

use livescope_core::{Next, Progress, Result};
use url::Url;

/// A single GET request, fully resolved by [`KrakenClient`](super::KrakenClient).
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    pub url: &'a Url,
    pub user_agent: &'a str,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw bytes; decoding is left to the caller.
    pub body: Vec<u8>,
}

/// Minimal blocking HTTP client trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation,
/// for example the one already used by the host application.
///
/// # Implementing the trait
///
/// ```ignore
/// use backend_kraken::{HttpClient, HttpRequest, HttpResponse, Next, Progress, Result};
///
/// struct MyHttpClient;
///
/// impl HttpClient for MyHttpClient {
///     fn get(
///         &self,
///         request: &HttpRequest<'_>,
///         progress: &dyn Fn(&Progress) -> Next,
///     ) -> Result<HttpResponse> {
///         // Send the request with `User-Agent: request.user_agent`, then read
///         // the body in chunks, calling `progress` before each read and
///         // returning `Error::Cancelled` as soon as it answers `Next::Abort`.
///         todo!()
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// # Arguments
    /// * `request` - URL, user agent and timeout of the request
    /// * `progress` - Called before the request is sent and after every
    ///   received chunk; `Next::Abort` must end the request with
    ///   `Error::Cancelled` and discard what was received so far
    ///
    /// # Returns
    /// The status and body of the response. Non-success statuses are
    /// responses too, only transport failures are errors.
    fn get(
        &self,
        request: &HttpRequest<'_>,
        progress: &dyn Fn(&Progress) -> Next,
    ) -> Result<HttpResponse>;
}
