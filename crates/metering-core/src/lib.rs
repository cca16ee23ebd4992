//! Shared schema types for the metering API.
//!
//! This crate provides the value types referenced by more than one API
//! resource:
//!
//! - **Billing periods**: `BillingPeriod`, `BillingPeriodUnit`
//! - **Payments**: `PaymentStatus`
//! - **Open enumerations**: the `string_enum!` macro, which keeps values
//!   the server adds later instead of failing to decode them

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod billing;
pub mod enums;

pub use billing::{BillingPeriod, BillingPeriodUnit, PaymentStatus};
