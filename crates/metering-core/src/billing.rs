//! Billing period and payment status types.
//!
//! These are shared by several metering API resources (invoices, prepaid
//! orders, pricing plans), so they live here rather than next to any one
//! resource.

use serde::{Deserialize, Serialize};

crate::string_enum! {
    /// Unit of a recurring billing cycle.
    pub enum BillingPeriodUnit {
        /// Daily billing.
        Day => "day",
        /// Monthly billing.
        Month => "month",
        /// Yearly billing.
        Year => "year",
    } else Other
}

/// The recurring cycle over which usage is aggregated into an invoice.
///
/// Both fields are optional on the wire. `intervals_count` multiplies the
/// unit, so `{ interval: month, intervals_count: 3 }` is a quarterly cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriod {
    /// Cycle unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<BillingPeriodUnit>,

    /// Number of units per cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervals_count: Option<i64>,
}

impl BillingPeriod {
    /// Create a billing period of `count` units.
    #[must_use]
    pub const fn new(interval: BillingPeriodUnit, count: i64) -> Self {
        Self {
            interval: Some(interval),
            intervals_count: Some(count),
        }
    }
}

crate::string_enum! {
    /// Payment state of an invoice or prepaid order.
    pub enum PaymentStatus {
        /// Paid ahead of usage.
        PrePayment => "PRE_PAYMENT",
        /// The payment provider needs customer action (e.g. 3-D Secure).
        RequiresAction => "REQUIRES_ACTION",
        /// Payment submitted, not yet confirmed.
        Pending => "PENDING",
        /// Payment attempt failed.
        Failed => "FAILED",
        /// Payment received.
        Settled => "SETTLED",
        /// Nothing to collect.
        NotNeeded => "NOT_NEEDED",
        /// The server itself does not know the payment state.
        Unknown => "UNKNOWN",
    } else Other
}
