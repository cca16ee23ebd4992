//! Invoice API types.
//!
//! Every field is optional on the wire: invoices early in their lifecycle
//! may lack final pricing or payment data. Absent and `null` fields decode
//! to `None`, and `None` fields are omitted when encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use metering_core::{BillingPeriod, PaymentStatus};

metering_core::string_enum! {
    /// Pricing lifecycle stage of an invoice.
    pub enum InvoicePriceStatus {
        /// The billing period is open and still accumulating usage.
        Open => "OPEN",
        /// The usage period ended; the price is not final yet.
        GracePeriod => "GRACE_PERIOD",
        /// The price is final.
        PriceLocked => "PRICE_LOCKED",
    } else Unknown
}

/// Composite key identifying one invoice: one customer, one product plan,
/// one billing period date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceKey {
    /// Account the customer belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Customer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Day of month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Month (1-12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Product ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Product plan ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_plan_id: Option<String>,
}

/// A commitment (pre-purchased credit or obligation) applied to an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedCommitment {
    /// Commitment ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_id: Option<String>,
    /// Fee in the invoice's native currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<f64>,
    /// Fee in the account's base currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_in_base_currency: Option<f64>,
    /// Fee in credits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_in_credits: Option<f64>,
    /// Obligation ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obligation_id: Option<String>,
    /// Obligation display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obligation_name: Option<String>,
}

/// Aggregate total for the invoice period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalBill {
    /// Total price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

/// A customer's invoice for one product plan and billing period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvoice {
    /// Invoice key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_key: Option<InvoiceKey>,

    /// Commitments applied, in server order.
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub applied_commitments: Vec<AppliedCommitment>,

    /// Link to the rendered invoice document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_uri: Option<String>,

    /// Billing period of the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_billing_period: Option<BillingPeriod>,

    /// Invoice period start (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_start_time_in_seconds: Option<i64>,

    /// Invoice period end (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_end_time_in_seconds: Option<i64>,

    /// Plan name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,

    /// Pricing lifecycle stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_price_status: Option<InvoicePriceStatus>,

    /// Payment state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,

    /// Total bill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bill: Option<TotalBill>,
}

impl UserInvoice {
    /// Invoice period start as a UTC timestamp.
    #[must_use]
    pub fn invoice_start(&self) -> Option<DateTime<Utc>> {
        self.invoice_start_time_in_seconds
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    /// Invoice period end as a UTC timestamp.
    #[must_use]
    pub fn invoice_end(&self) -> Option<DateTime<Utc>> {
        self.invoice_end_time_in_seconds
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }

    /// Total price, if the server has priced the invoice.
    #[must_use]
    pub fn total_price(&self) -> Option<f64> {
        self.total_bill.as_ref().and_then(|bill| bill.total_price)
    }

    /// Whether the invoice price is final.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(
            self.invoice_price_status,
            Some(InvoicePriceStatus::PriceLocked)
        )
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metering_core::BillingPeriodUnit;

    const FULL_INVOICE: &str = r#"{
        "invoiceKey": {
            "accountId": "acct_1",
            "customerId": "cust_123",
            "day": 1,
            "month": 5,
            "year": 2024,
            "productId": "1",
            "productPlanId": "plan_std"
        },
        "appliedCommitments": [
            {"commitmentId": "c2", "feeAmount": 10.0, "obligationName": "Second"},
            {"commitmentId": "c1", "feeAmount": 2.5, "feeInBaseCurrency": 2.5, "feeInCredits": 250.0, "obligationId": "o1"}
        ],
        "invoiceUri": "https://example.test/invoices/1.pdf",
        "planBillingPeriod": {"interval": "month", "intervalsCount": 1},
        "invoiceStartTimeInSeconds": 1714521600,
        "invoiceEndTimeInSeconds": 1717200000,
        "planName": "Standard",
        "invoicePriceStatus": "PRICE_LOCKED",
        "paymentStatus": "SETTLED",
        "totalBill": {"totalPrice": 42.5}
    }"#;

    #[test]
    fn decodes_sparse_invoice() {
        let invoice: UserInvoice = serde_json::from_str(
            r#"{"invoiceKey":{"customerId":"cust_123","month":5,"year":2024},"totalBill":{"totalPrice":42.5}}"#,
        )
        .unwrap();

        let key = invoice.invoice_key.clone().unwrap();
        assert_eq!(key.customer_id.as_deref(), Some("cust_123"));
        assert_eq!(key.month, Some(5));
        assert_eq!(key.year, Some(2024));
        assert_eq!(key.day, None);
        assert_eq!(key.account_id, None);
        assert_eq!(invoice.total_price(), Some(42.5));

        assert!(invoice.applied_commitments.is_empty());
        assert_eq!(invoice.invoice_uri, None);
        assert_eq!(invoice.plan_billing_period, None);
        assert_eq!(invoice.invoice_start_time_in_seconds, None);
        assert_eq!(invoice.invoice_end_time_in_seconds, None);
        assert_eq!(invoice.plan_name, None);
        assert_eq!(invoice.invoice_price_status, None);
        assert_eq!(invoice.payment_status, None);
    }

    #[test]
    fn decodes_full_invoice() {
        let invoice: UserInvoice = serde_json::from_str(FULL_INVOICE).unwrap();

        assert_eq!(invoice.applied_commitments.len(), 2);
        assert_eq!(
            invoice.applied_commitments[0].commitment_id.as_deref(),
            Some("c2")
        );
        assert_eq!(invoice.applied_commitments[1].fee_in_credits, Some(250.0));
        assert_eq!(
            invoice.plan_billing_period,
            Some(BillingPeriod::new(BillingPeriodUnit::Month, 1))
        );
        assert_eq!(
            invoice.invoice_price_status,
            Some(InvoicePriceStatus::PriceLocked)
        );
        assert_eq!(invoice.payment_status, Some(PaymentStatus::Settled));
        assert!(invoice.is_final());
    }

    #[test]
    fn round_trip_preserves_populated_fields() {
        let original: serde_json::Value = serde_json::from_str(FULL_INVOICE).unwrap();
        let invoice: UserInvoice = serde_json::from_value(original.clone()).unwrap();
        let encoded = serde_json::to_value(&invoice).unwrap();
        assert_eq!(encoded, original);
    }

    #[test]
    fn encoding_omits_absent_fields() {
        let invoice = UserInvoice {
            plan_name: Some("Starter".to_string()),
            ..UserInvoice::default()
        };
        assert_eq!(
            serde_json::to_string(&invoice).unwrap(),
            r#"{"planName":"Starter"}"#
        );
    }

    #[test]
    fn present_zero_is_not_absent() {
        let invoice: UserInvoice =
            serde_json::from_str(r#"{"totalBill":{"totalPrice":0.0},"invoiceStartTimeInSeconds":0}"#)
                .unwrap();
        assert_eq!(invoice.total_price(), Some(0.0));
        assert_eq!(invoice.invoice_start_time_in_seconds, Some(0));
        assert_eq!(invoice.invoice_start().map(|t| t.timestamp()), Some(0));
    }

    #[test]
    fn nulls_decode_as_absent() {
        let invoice: UserInvoice = serde_json::from_str(
            r#"{"appliedCommitments":null,"planName":null,"totalBill":null}"#,
        )
        .unwrap();
        assert!(invoice.applied_commitments.is_empty());
        assert_eq!(invoice.plan_name, None);
        assert_eq!(invoice.total_bill, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let invoice: UserInvoice =
            serde_json::from_str(r#"{"planName":"Pro","currency":"USD"}"#).unwrap();
        assert_eq!(invoice.plan_name.as_deref(), Some("Pro"));
    }

    #[test]
    fn unknown_price_status_round_trips() {
        let invoice: UserInvoice =
            serde_json::from_str(r#"{"invoicePriceStatus":"VOIDED"}"#).unwrap();
        assert_eq!(
            invoice.invoice_price_status,
            Some(InvoicePriceStatus::Unknown("VOIDED".to_string()))
        );
        assert!(!invoice.is_final());
        assert_eq!(
            serde_json::to_string(&invoice).unwrap(),
            r#"{"invoicePriceStatus":"VOIDED"}"#
        );
    }

    #[test]
    fn price_status_wire_values() {
        assert_eq!(InvoicePriceStatus::Open.as_str(), "OPEN");
        assert_eq!(InvoicePriceStatus::GracePeriod.as_str(), "GRACE_PERIOD");
        assert_eq!(InvoicePriceStatus::PriceLocked.as_str(), "PRICE_LOCKED");
    }

    #[test]
    fn invoice_period_timestamps() {
        let invoice: UserInvoice = serde_json::from_str(FULL_INVOICE).unwrap();
        let start = invoice.invoice_start().unwrap();
        let end = invoice.invoice_end().unwrap();
        assert_eq!(start.to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }
}
