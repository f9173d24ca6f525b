/*
[INPUT]:  API key, HTTP configuration (base URL, timeouts) and request descriptors
[OUTPUT]: Dispatched requests decoded into typed results or SimpleSwapError
[POS]:    HTTP layer - core client implementation and response decoding
[UPDATE]: When adding connection options or changing dispatch/decode behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use super::endpoint::Endpoint;
use super::error::{Result, SimpleSwapError};
use super::request::ApiRequest;

/// Base URL for the SimpleSwap API
pub const BASE_URL: &str = "https://api.simpleswap.io";

const API_KEY_PARAM: &str = "api_key";

/// HTTP client configuration
///
/// Timeouts left as `None` fall back to the transport defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Main HTTP client for the SimpleSwap API
///
/// Immutable after construction; clone it or share it by reference across tasks.
#[derive(Clone)]
pub struct SimpleSwapClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for SimpleSwapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleSwapClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl SimpleSwapClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| SimpleSwapError::local("invalid base URL", err))?;
        if base_url.cannot_be_a_base() {
            return Err(SimpleSwapError::local(
                "invalid base URL",
                format!("{base_url} cannot carry a path"),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|err| SimpleSwapError::local("error building HTTP client", err))?;

        Ok(Self {
            http_client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append the endpoint to the base URL, keeping any path prefix the base carries.
    pub(crate) fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                SimpleSwapError::local("error making API request", "base URL cannot carry a path")
            })?
            .pop_if_empty()
            .push(endpoint.path().trim_start_matches('/'));
        Ok(url)
    }

    /// Dispatch a request and decode the response into `T`.
    ///
    /// The API key is always sent as a query parameter. Parameters go to the
    /// JSON body for POST and to the query string otherwise.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.endpoint_url(request.endpoint)?;

        debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            params = request.params.len(),
            headers = request.headers.len(),
            "dispatching SimpleSwap request"
        );

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .query(&[(API_KEY_PARAM, self.api_key.as_str())]);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        if !request.params.is_empty() {
            builder = if request.params_in_body() {
                builder.json(&request.params)
            } else {
                builder.query(&request.params)
            };
        }

        // without_url keeps the api_key out of error descriptions
        let response = builder
            .send()
            .await
            .map_err(|err| SimpleSwapError::local("error making API request", err.without_url()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| SimpleSwapError::local("error making API request", err.without_url()))?;

        debug!(endpoint = %request.endpoint, %status, "received SimpleSwap response");
        trace!(endpoint = %request.endpoint, bytes = body.len(), "response body");

        decode_response(status, &body)
    }
}

/// Decode a success body into `T`, or an error body into [`SimpleSwapError`].
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return serde_json::from_slice(body)
            .map_err(|err| SimpleSwapError::local("error unmarshalling result", err));
    }

    let api_error: SimpleSwapError = serde_json::from_slice(body)
        .map_err(|err| SimpleSwapError::local("error unmarshalling error response", err))?;
    Err(api_error)
}
