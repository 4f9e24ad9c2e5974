//! The gateway facade: one method per transaction kind.
//!
//! Every submission follows the same path: build the field set, validate it
//! locally, send it through the transport, normalize the outcome into a
//! [`TransactionResult`] and hand that to the persistence collaborator.

use std::sync::Arc;

use rust_decimal::Decimal;

use payflow_types::{TransactionKind, TransactionResult};

use crate::config::{ConfigOverrides, GatewayConfig};
use crate::error::Result;
use crate::fields::FieldSet;
use crate::normalize;
use crate::request::{self, CardDetails, PaymentOptions};
use crate::storage::TransactionStore;
use crate::transport::{HttpClient, HttpSend, Transport};
use crate::validate;

/// Payflow gateway client.
///
/// Cheap to share behind an `Arc`: configuration is immutable, the
/// transport holds no per-call state, and submissions from concurrent
/// tasks are independent.
pub struct Gateway<H: HttpSend> {
    config: GatewayConfig,
    transport: Transport<H>,
    store: Arc<dyn TransactionStore>,
}

impl Gateway<HttpClient> {
    /// Create a gateway over a default reqwest-backed transport.
    pub fn new(config: GatewayConfig, store: Arc<dyn TransactionStore>) -> Self {
        Self::with_transport(config, store, Transport::new(HttpClient::new()))
    }
}

impl<H: HttpSend> Gateway<H> {
    /// Create a gateway over a custom transport, eg one with a different
    /// retry policy or fault observer.
    pub fn with_transport(
        config: GatewayConfig,
        store: Arc<dyn TransactionStore>,
        transport: Transport<H>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    /// Make an AUTHORIZE request.
    ///
    /// This holds the money within the customer's bankcard but doesn't
    /// settle - that comes from a later delayed capture. The hold lasts
    /// around a week and cannot be cancelled through the API.
    pub async fn authorize(
        &self,
        order_number: &str,
        card: &CardDetails,
        amount: Decimal,
        options: &PaymentOptions,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::authorize(&creds, order_number, card, amount, options);
        self.submit(TransactionKind::Authorization, fields).await
    }

    /// Make a SALE request: authorize and mark for settlement immediately.
    pub async fn sale(
        &self,
        order_number: &str,
        card: &CardDetails,
        amount: Decimal,
        options: &PaymentOptions,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::sale(&creds, order_number, card, amount, options);
        self.submit(TransactionKind::Sale, fields).await
    }

    /// Capture money that was previously authorized. Omitting the amount
    /// captures the full authorized amount.
    pub async fn delayed_capture(
        &self,
        order_number: &str,
        pnref: &str,
        amount: Option<Decimal>,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::delayed_capture(&creds, order_number, pnref, amount);
        self.submit(TransactionKind::DelayedCapture, fields).await
    }

    /// Capture money using the card and address details of a previous
    /// transaction. The referenced PNREF stays valid for 12 months.
    pub async fn reference_transaction(
        &self,
        order_number: &str,
        pnref: &str,
        amount: Decimal,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::reference_transaction(&creds, order_number, pnref, amount);
        self.submit(TransactionKind::Reference, fields).await
    }

    /// Refund money back to a bankcard. Omitting the amount refunds the
    /// full original amount.
    pub async fn credit(
        &self,
        order_number: &str,
        pnref: &str,
        amount: Option<Decimal>,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::credit(&creds, order_number, pnref, amount);
        self.submit(TransactionKind::Credit, fields).await
    }

    /// Prevent a transaction from being settled.
    pub async fn void(
        &self,
        order_number: &str,
        pnref: &str,
        overrides: &ConfigOverrides,
    ) -> Result<TransactionResult> {
        let creds = self.config.resolve(overrides);
        let fields = request::void(&creds, order_number, pnref);
        self.submit(TransactionKind::Void, fields).await
    }

    async fn submit(&self, kind: TransactionKind, fields: FieldSet) -> Result<TransactionResult> {
        validate::validate(kind, &fields)?;

        tracing::info!(kind = %kind, trxtype = kind.trxtype(), "performing Payflow transaction");
        let url = self.config.environment().endpoint();
        let exchange = self.transport.send(url, &fields).await?;

        // Raw bodies carry the gateway credentials; never log them in
        // production.
        if !self.config.environment().is_production() {
            tracing::debug!(
                raw_request = %exchange.raw_request,
                raw_response = %exchange.raw_response,
                "Payflow exchange"
            );
        }

        let record = normalize::normalize(kind, &fields, exchange)?;
        self.store.create(&record).await?;
        Ok(record)
    }
}
