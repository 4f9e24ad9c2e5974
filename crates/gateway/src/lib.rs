//! Server-side client for PayPal's Payflow Pro payment gateway.
//!
//! Payflow speaks a flat name-value-pair protocol over HTTP POST. This
//! crate builds transaction requests (authorize, sale, delayed capture,
//! reference transaction, credit, void), validates their mandatory fields
//! before any network call, submits them with bounded retry, decodes the
//! flat response and produces an immutable audit record per transaction.
//!
//! # Overview
//!
//! The submission pipeline, leaf to root:
//!
//! - [`codec`] - the non-URL-encoded `name=value&...` wire format
//! - [`transport`] - HTTP POST with bounded immediate retry and failure
//!   classification behind the [`HttpSend`] seam
//! - [`request`] - one field-set builder per transaction kind
//! - [`validate`] - per-kind mandatory-field checks, run before transport
//! - [`normalize`] - decoded response + audit material into a
//!   [`TransactionResult`]
//! - [`Gateway`] - the facade tying the pipeline together
//!
//! Persistence and fault observability are collaborators behind the
//! [`TransactionStore`] and [`FaultObserver`] traits.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use payflow_gateway::{
//!     CardDetails, ConfigOverrides, Environment, Gateway, GatewayConfig, MemoryStore,
//!     PaymentOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GatewayConfig::new("myvendor", "mypassword", Environment::Sandbox)?;
//!     let store = Arc::new(MemoryStore::new());
//!     let gateway = Gateway::new(config, store);
//!
//!     let card = CardDetails {
//!         number: "4111111111111111".to_string(),
//!         cvv: "123".to_string(),
//!         expiry: "1225".to_string(),
//!     };
//!     let result = gateway
//!         .sale(
//!             "ORD1",
//!             &card,
//!             "19.99".parse()?,
//!             &PaymentOptions::default(),
//!             &ConfigOverrides::default(),
//!         )
//!         .await?;
//!
//!     println!("PNREF: {:?}, approved: {}", result.pnref, result.is_approved());
//!     Ok(())
//! }
//! ```
//!
//! # Retry caveat
//!
//! Transport failures are retried immediately with no backoff, matching the
//! gateway's expectations. A retried request is not inherently idempotent:
//! if the gateway processed an attempt whose response was lost, a retry can
//! double-charge. Submissions where that matters should run with
//! `RetryPolicy::with_max_attempts(1)`.

pub mod codec;
pub mod config;
pub mod error;
pub mod fields;
pub mod gateway;
pub mod normalize;
pub mod observe;
pub mod request;
pub mod storage;
pub mod transport;
pub mod validate;

// Re-export main types at crate root
pub use config::{ConfigOverrides, Environment, GatewayConfig, ResolvedCredentials};
pub use error::{GatewayError, Result};
pub use fields::FieldSet;
pub use gateway::Gateway;
pub use observe::{FaultObserver, TracingFaultObserver};
pub use request::{BillingDetails, CardDetails, PaymentOptions};
pub use storage::{MemoryStore, StoreError, TransactionStore};
pub use transport::{
    Exchange, HttpClient, HttpResponse, HttpSend, RetryPolicy, Transport, TransportFault,
    NAMEVALUE_CONTENT_TYPE,
};

pub use payflow_types::{Tender, TransactionKind, TransactionResult};
