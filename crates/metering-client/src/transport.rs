//! HTTP transport shared by all API clients.
//!
//! Resource clients (such as [`InvoiceClient`](crate::InvoiceClient)) only
//! build URLs and decode bodies; the exchange itself goes through a
//! [`Transport`]. [`HttpTransport`] is the production implementation. Tests
//! and embedders can provide their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, Url};

use crate::config::ClientOptions;
use crate::error::{ClientError, TransportError};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Performs one HTTP exchange against the metering API.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send a request and return the raw body of a successful response.
    ///
    /// `api_name` labels the API family for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the exchange fails and
    /// [`TransportError::Status`] if the server answers with a non-2xx status.
    async fn send(
        &self,
        api_name: &str,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError>;
}

/// `reqwest`-backed transport that authenticates with an API key.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, options: &ClientOptions) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        api_name: &str,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(api = api_name, %method, %url, "Sending metering API request");

        let mut request = self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                api: api_name.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
