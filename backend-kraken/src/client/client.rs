use std::sync::Arc;

use livescope_core::{
    constants::{API_STATUS_OK, STREAM_SEARCH_LIMIT},
    CancellationFlag, Config, DepartmentList, Error, QueryParameters, Result, StreamList,
    StreamRecord,
};
use serde_json::Value;
use url::Url;

use super::http_trait::{HttpClient, HttpRequest};
use super::structs::SearchStreamsResponse;

const SEARCH_STREAMS_PATH: &[&str] = &["search", "streams"];
const DEPARTMENTS_PATH: &[&str] = &["categories"];

/// Client for the Kraken streaming API.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// One request runs at a time and blocks the caller. [`KrakenClient::cancel`]
/// may be called from any other thread to abandon it.
pub struct KrakenClient<H: HttpClient> {
    http_client: H,
    config: Arc<Config>,
    cancelled: CancellationFlag,
}

#[cfg(feature = "ureq-client")]
impl KrakenClient<super::UreqClient> {
    /// Create a client backed by a default `UreqClient`.
    pub fn from_config(config: Arc<Config>) -> Self {
        Self::new(config, super::UreqClient::new())
    }
}

impl<H: HttpClient> KrakenClient<H> {
    /// Create a new client. No I/O happens here and the API root is not
    /// validated until the first request.
    ///
    /// # Arguments
    /// * `config` - Shared client settings
    /// * `http_client` - HTTP client implementation
    pub fn new(config: Arc<Config>, http_client: H) -> Self {
        KrakenClient {
            http_client,
            config,
            cancelled: CancellationFlag::new(),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Handle on this client's cancellation flag, for cancelling from a
    /// thread that does not hold the client.
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancelled.clone()
    }

    /// Abandon the in-flight request, if any, and refuse every later one.
    ///
    /// The in-flight request only notices once response data is flowing or
    /// its timeout fires; with no timeout, a server that never sends headers
    /// keeps it blocked.
    pub fn cancel(&self) {
        self.cancelled.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.is_cancelled()
    }

    /// Build `{api_root}/{path_segments}?{query_parameters}`.
    ///
    /// Path segments are percent-escaped, parameters form-urlencoded in key
    /// order.
    pub fn request_uri(
        &self,
        path_segments: &[&str],
        query_parameters: &QueryParameters,
    ) -> Result<Url> {
        let api_root = self.config.api_root();
        let mut url = Url::parse(api_root)
            .map_err(|e| Error::Transport(format!("invalid API root {api_root:?}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| Error::Transport(format!("API root {api_root:?} cannot be a base URL")))?
            .pop_if_empty()
            .extend(path_segments);

        if !query_parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(query_parameters);
        }

        Ok(url)
    }

    /// GET a JSON document from the API.
    ///
    /// Fails with `Cancelled` without any I/O when the client was already
    /// cancelled, `Remote` on a non-200 HTTP status or an API error payload,
    /// and `Decode` when a 200 body is not UTF-8 JSON.
    pub fn fetch_json(
        &self,
        path_segments: &[&str],
        query_parameters: &QueryParameters,
    ) -> Result<Value> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let url = self.request_uri(path_segments, query_parameters)?;
        log::debug!("GET {}", url);

        let request = HttpRequest {
            url: &url,
            user_agent: self.config.user_agent(),
            timeout: self.config.timeout(),
        };
        let response = self
            .http_client
            .get(&request, &|progress| self.cancelled.progress_report(progress))
            .map_err(|e| {
                if !e.is_cancelled() {
                    log::warn!("GET {} failed: {}", url, e);
                }
                e
            })?;

        if response.status != API_STATUS_OK {
            log::warn!("GET {} returned HTTP {}", url, response.status);
            return Err(Error::Remote {
                status: Some(response.status),
                message: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let body = String::from_utf8(response.body)
            .map_err(|e| Error::Decode(format!("response body is not UTF-8: {e}")))?;
        let root: Value = serde_json::from_str(&body)?;
        check_api_status(&root)?;

        Ok(root)
    }

    /// Search live streams, at most [`STREAM_SEARCH_LIMIT`] of them, in the
    /// order the service ranked them.
    pub fn query_streams(&self, search_text: &str) -> Result<StreamList> {
        let parameters = QueryParameters::from([
            ("q".to_string(), search_text.to_string()),
            ("limit".to_string(), STREAM_SEARCH_LIMIT.to_string()),
        ]);
        let root = self.fetch_json(SEARCH_STREAMS_PATH, &parameters)?;
        if !root.is_object() {
            return Err(Error::Decode(format!(
                "expected a search result object, got {}",
                json_type(&root)
            )));
        }

        let response: SearchStreamsResponse = serde_json::from_value(root)?;
        Ok(response
            .channels
            .into_iter()
            .map(StreamRecord::from)
            .collect())
    }

    /// Department ids are the top-level keys of the categories document, in
    /// document order.
    pub fn query_departments(&self) -> Result<DepartmentList> {
        let parameters =
            QueryParameters::from([("requireGuides".to_string(), "true".to_string())]);
        let root = self.fetch_json(DEPARTMENTS_PATH, &parameters)?;

        match root {
            Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
            other => Err(Error::Decode(format!(
                "expected a categories object, got {}",
                json_type(&other)
            ))),
        }
    }
}

/// The API reports errors in a top-level `status` field, sent as a string or
/// as a number depending on the endpoint.
fn check_api_status(root: &Value) -> Result<()> {
    let status = match root.get("status") {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Ok(()),
    };

    let ok = match status.parse::<f64>() {
        Ok(code) => code == f64::from(API_STATUS_OK),
        Err(_) => false,
    };
    if ok {
        return Ok(());
    }

    let message = match root.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    log::warn!("API error status {}: {}", status, message);

    Err(Error::Remote {
        status: status.parse().ok(),
        message,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
