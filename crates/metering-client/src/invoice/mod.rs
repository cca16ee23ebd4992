//! Invoice retrieval.
//!
//! Invoices are read-only projections of server state: the client never
//! creates or mutates one, and every call fetches a fresh copy.

pub mod client;
pub mod types;

pub use client::InvoiceClient;
pub use types::*;
