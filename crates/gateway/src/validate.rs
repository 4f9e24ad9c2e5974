//! Pre-submission validation of assembled field sets.
//!
//! Runs synchronously before any network call so a request that cannot
//! succeed never costs a round-trip.

use payflow_types::TransactionKind;

use crate::error::{GatewayError, Result};
use crate::fields::{FieldSet, names};

/// Mandatory fields per transaction kind.
///
/// The `match` on the closed enum means an unconstrained kind cannot exist:
/// adding a variant without a row here is a compile error.
pub fn mandatory_fields(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Authorization => &[names::ACCT, names::AMT, names::EXPDATE],
        TransactionKind::Sale => &[names::AMT],
        TransactionKind::Reference => &[names::AMT, names::ORIGID],
        TransactionKind::DelayedCapture => &[names::ORIGID],
        TransactionKind::Credit => &[names::ORIGID],
        TransactionKind::Void => &[names::ORIGID],
    }
}

/// Check that `fields` carries everything mandatory for `kind`.
///
/// A mandatory field must be present AND non-empty; an empty origin
/// reference is as useless to the gateway as a missing one. TRXTYPE is
/// mandatory for every kind and must match the kind being submitted.
pub fn validate(kind: TransactionKind, fields: &FieldSet) -> Result<()> {
    if fields.get(names::TRXTYPE) != Some(kind.trxtype()) {
        return Err(GatewayError::InvalidTransactionRequest {
            kind,
            field: names::TRXTYPE,
        });
    }
    for &field in mandatory_fields(kind) {
        if fields.get(field).is_none_or(str::is_empty) {
            return Err(GatewayError::InvalidTransactionRequest { kind, field });
        }
    }
    Ok(())
}
