//! Metering Client SDK.
//!
//! This crate provides a client library for reading invoices from the
//! metering API.
//!
//! # Example
//!
//! ```no_run
//! use metering_client::{ClientOptions, InvoiceClient};
//!
//! # async fn example() -> Result<(), metering_client::ClientError> {
//! let client = InvoiceClient::with_options(
//!     "your-api-key",
//!     ClientOptions::default().with_timeout_seconds(10),
//! )?;
//!
//! let latest = client.get_latest_invoice("customer-123").await?;
//! println!("Latest total: {:?}", latest.total_price());
//!
//! for invoice in client.list_all_invoices("customer-123").await? {
//!     println!("{:?} {:?}", invoice.plan_name, invoice.invoice_price_status);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
pub mod invoice;
mod transport;

pub use config::{ClientOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
pub use error::{ClientError, TransportError};
pub use invoice::{
    AppliedCommitment, InvoiceClient, InvoiceKey, InvoicePriceStatus, TotalBill, UserInvoice,
};
pub use metering_core::{BillingPeriod, BillingPeriodUnit, PaymentStatus};
pub use reqwest::{Method, Url};
pub use transport::{HttpTransport, Transport, API_KEY_HEADER};
