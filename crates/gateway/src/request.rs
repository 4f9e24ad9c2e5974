//! Field-set construction, one builder per transaction kind.
//!
//! Builders assemble the caller's arguments and the resolved credentials
//! into a [`FieldSet`]; they perform no validation and no I/O. Amounts are
//! formatted here so the wire always carries exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use payflow_types::{Tender, TransactionKind};

use crate::config::ResolvedCredentials;
use crate::fields::{FieldSet, names};

/// Bankcard details for authorize/sale submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// Card number (ACCT).
    pub number: String,
    /// Card verification value (CVV2).
    pub cvv: String,
    /// Expiry date as MMYY (EXPDATE), eg `1225` for December 2025.
    pub expiry: String,
}

/// Optional billing address, only needed when the account uses the
/// address verification service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Optional extras for authorize/sale submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentOptions {
    /// Secondary audit comment (COMMENT2).
    pub comment2: Option<String>,
    pub billing: Option<BillingDetails>,
}

/// Format an amount for submission: exactly two decimal places, rounding
/// half away from zero. `10` becomes `"10.00"`, `10.005` becomes `"10.01"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn base_fields(creds: &ResolvedCredentials, kind: TransactionKind, order_number: &str) -> FieldSet {
    let mut fields = FieldSet::new();
    fields.set(names::VENDOR, creds.vendor.as_str());
    fields.set(names::PWD, creds.password.as_str());
    fields.set(names::USER, creds.user.as_str());
    fields.set(names::PARTNER, creds.partner.as_str());
    fields.set(names::CURRENCY, creds.currency.as_str());
    fields.set(names::TRXTYPE, kind.trxtype());
    fields.set(names::COMMENT1, order_number);
    fields
}

/// AUTHORIZATION request: hold funds on the bankcard without settling.
pub fn authorize(
    creds: &ResolvedCredentials,
    order_number: &str,
    card: &CardDetails,
    amount: Decimal,
    options: &PaymentOptions,
) -> FieldSet {
    payment_fields(creds, TransactionKind::Authorization, order_number, card, amount, options)
}

/// SALE request: authorize and mark for settlement immediately.
pub fn sale(
    creds: &ResolvedCredentials,
    order_number: &str,
    card: &CardDetails,
    amount: Decimal,
    options: &PaymentOptions,
) -> FieldSet {
    payment_fields(creds, TransactionKind::Sale, order_number, card, amount, options)
}

fn payment_fields(
    creds: &ResolvedCredentials,
    kind: TransactionKind,
    order_number: &str,
    card: &CardDetails,
    amount: Decimal,
    options: &PaymentOptions,
) -> FieldSet {
    let mut fields = base_fields(creds, kind, order_number);
    fields.set(names::TENDER, Tender::Bankcard.code());
    fields.set(names::AMT, format_amount(amount));
    fields.set(names::ACCT, card.number.as_str());
    fields.set(names::CVV2, card.cvv.as_str());
    fields.set(names::EXPDATE, card.expiry.as_str());
    fields.set_opt(names::COMMENT2, options.comment2.as_deref());
    if let Some(billing) = &options.billing {
        fields.set_opt(names::FIRSTNAME, billing.first_name.as_deref());
        fields.set_opt(names::LASTNAME, billing.last_name.as_deref());
        fields.set_opt(names::STREET, billing.street.as_deref());
        fields.set_opt(names::CITY, billing.city.as_deref());
        fields.set_opt(names::STATE, billing.state.as_deref());
        fields.set_opt(names::ZIP, billing.zip.as_deref());
        fields.set_opt(names::BILLTOCOUNTRY, billing.country_code.as_deref());
        fields.set_opt(names::EMAIL, billing.email.as_deref());
        fields.set_opt(names::PHONENUM, billing.phone.as_deref());
    }
    fields
}

/// DELAYED CAPTURE request: settle a previous authorization. Omitting the
/// amount captures the full authorized amount.
pub fn delayed_capture(
    creds: &ResolvedCredentials,
    order_number: &str,
    pnref: &str,
    amount: Option<Decimal>,
) -> FieldSet {
    let mut fields = base_fields(creds, TransactionKind::DelayedCapture, order_number);
    fields.set(names::ORIGID, pnref);
    if let Some(amount) = amount {
        fields.set(names::AMT, format_amount(amount));
    }
    fields
}

/// Reference transaction: a new sale against the card and address details
/// stored for a previous transaction. The PNREF of the original transaction
/// stays valid for 12 months. Submitted with TRXTYPE=S - there is no
/// dedicated wire kind.
pub fn reference_transaction(
    creds: &ResolvedCredentials,
    order_number: &str,
    pnref: &str,
    amount: Decimal,
) -> FieldSet {
    let mut fields = base_fields(creds, TransactionKind::Reference, order_number);
    fields.set(names::TENDER, Tender::Bankcard.code());
    fields.set(names::ORIGID, pnref);
    fields.set(names::AMT, format_amount(amount));
    fields
}

/// CREDIT request: refund money back to a bankcard. Omitting the amount
/// refunds the full original amount.
pub fn credit(
    creds: &ResolvedCredentials,
    order_number: &str,
    pnref: &str,
    amount: Option<Decimal>,
) -> FieldSet {
    let mut fields = base_fields(creds, TransactionKind::Credit, order_number);
    fields.set(names::ORIGID, pnref);
    if let Some(amount) = amount {
        fields.set(names::AMT, format_amount(amount));
    }
    fields
}

/// VOID request: prevent a previous transaction from being settled.
pub fn void(creds: &ResolvedCredentials, order_number: &str, pnref: &str) -> FieldSet {
    let mut fields = base_fields(creds, TransactionKind::Void, order_number);
    fields.set(names::ORIGID, pnref);
    fields
}
