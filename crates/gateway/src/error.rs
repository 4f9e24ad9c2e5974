use thiserror::Error;

use payflow_types::TransactionKind;

use crate::storage::StoreError;

/// Errors that can occur while submitting a Payflow transaction.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required gateway credential is missing. Raised when the
    /// configuration is constructed, before any field set is built.
    #[error("missing required gateway credential: {0}")]
    Configuration(&'static str),

    /// A mandatory field for the declared transaction kind is missing or
    /// empty. Raised before any network call is made.
    #[error("a {field} parameter must be supplied for a {kind} transaction")]
    InvalidTransactionRequest {
        kind: TransactionKind,
        field: &'static str,
    },

    /// All transport attempts were exhausted, or the gateway answered with
    /// a non-success HTTP status.
    #[error("unable to communicate with the Payflow gateway: {0}")]
    GatewayUnavailable(String),

    /// The gateway answered, but the response body is missing a field it
    /// always returns.
    #[error("malformed gateway response: missing {field}")]
    MalformedResponse { field: &'static str },

    /// The persistence collaborator failed to record the transaction.
    #[error("failed to record transaction: {0}")]
    Storage(#[from] StoreError),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
