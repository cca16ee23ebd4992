//! Invoice API client implementation.

use std::sync::Arc;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use super::types::UserInvoice;
use crate::config::ClientOptions;
use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// API family name passed to the transport.
const INVOICE_API_NAME: &str = "Invoice";

const LATEST_INVOICE_PATH: &str = "/payments/billing/customer-product-invoice";
const ALL_INVOICES_PATH: &str = "/payments/billing/customer-product-invoice/all";

/// Metering invoice API client.
///
/// Holds no mutable state; clones share the same transport.
#[derive(Debug, Clone)]
pub struct InvoiceClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
}

impl InvoiceClient {
    /// Create a client against the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the endpoint is not a valid
    /// URL or the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(api_key, &options)?;
        Self::with_transport(Arc::new(transport), options.endpoint)
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the endpoint is not a valid URL.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            ClientError::Configuration(format!("invalid endpoint {endpoint:?}: {e}"))
        })?;

        tracing::info!(endpoint = %endpoint, "Instantiating metering invoice client");

        Ok(Self {
            transport,
            endpoint,
        })
    }

    /// Base URL requests are built from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the latest invoice for a customer.
    ///
    /// The customer ID is passed through unvalidated. A `null` body yields an
    /// invoice with every field absent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request fails or the server
    /// answers with a non-2xx status, and [`ClientError::Decode`] if the body
    /// is not an invoice object.
    pub async fn get_latest_invoice(&self, customer_id: &str) -> Result<UserInvoice, ClientError> {
        let url = self.url(
            LATEST_INVOICE_PATH,
            &[("customerId", customer_id), ("latest", "true")],
        )?;

        self.fetch("GetLatestInvoice", customer_id, url).await
    }

    /// List every invoice for a customer, in the order the server returns them.
    ///
    /// A customer without invoices yields an empty list, whether the server
    /// answers `[]` or `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request fails or the server
    /// answers with a non-2xx status, and [`ClientError::Decode`] if the body
    /// is not an array of invoice objects.
    pub async fn list_all_invoices(
        &self,
        customer_id: &str,
    ) -> Result<Vec<UserInvoice>, ClientError> {
        let url = self.url(ALL_INVOICES_PATH, &[("customerId", customer_id)])?;

        self.fetch("ListAllInvoices", customer_id, url).await
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        Url::parse_with_params(&format!("{}{path}", self.endpoint), params)
            .map_err(|e| ClientError::Configuration(format!("invalid request URL: {e}")))
    }

    /// Issue a GET and decode the body. A `null` body decodes to `T::default()`.
    async fn fetch<T: DeserializeOwned + Default>(
        &self,
        operation: &'static str,
        customer_id: &str,
        url: Url,
    ) -> Result<T, ClientError> {
        let body = self
            .transport
            .send(INVOICE_API_NAME, Method::GET, url, None)
            .await
            .map_err(|source| {
                tracing::error!(operation, customer_id, error = %source, "Invoice API error");
                ClientError::Transport {
                    operation,
                    customer_id: customer_id.to_string(),
                    source,
                }
            })?;

        serde_json::from_slice::<Option<T>>(&body)
            .map(Option::unwrap_or_default)
            .map_err(|source| ClientError::Decode {
                operation,
                customer_id: customer_id.to_string(),
                source,
            })
    }
}
