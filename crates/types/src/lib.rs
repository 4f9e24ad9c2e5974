//! Shared vocabulary for the Payflow Pro gateway client.
//!
//! This crate holds the protocol-level types that the rest of the workspace
//! agrees on:
//!
//! - [`TransactionKind`] - the closed set of transaction kinds and their
//!   TRXTYPE wire codes
//! - [`Tender`] - payment instrument types
//! - [`TransactionResult`] - the immutable audit record produced for every
//!   transaction that reached the gateway
//!
//! Everything here is plain data; the construction, validation and transport
//! logic lives in the `payflow-gateway` crate.

pub mod result;
pub mod transaction;

// Re-export main types at crate root
pub use result::TransactionResult;
pub use transaction::{Tender, TransactionKind};
