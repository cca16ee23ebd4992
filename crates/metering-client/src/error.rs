//! Client error types.

/// Errors raised by a [`Transport`](crate::Transport) while performing one
/// HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{api} API returned HTTP {status}: {body}")]
    Status {
        /// Name of the API family that was called (e.g. `"Invoice"`).
        api: String,
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded as UTF-8.
        body: String,
    },
}

/// Errors that can occur when using the metering client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange failed.
    #[error("{operation}({customer_id}): API error: {source}")]
    Transport {
        /// Operation that issued the request (e.g. `"GetLatestInvoice"`).
        operation: &'static str,
        /// Customer the request was made for.
        customer_id: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The response body did not match the expected schema.
    #[error("{operation}({customer_id}): error reading JSON body: {source}")]
    Decode {
        /// Operation that issued the request.
        operation: &'static str,
        /// Customer the request was made for.
        customer_id: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether the HTTP exchange itself failed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status code, if the server answered with a non-2xx status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport {
                source: TransportError::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}
