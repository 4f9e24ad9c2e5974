use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transaction::{Tender, TransactionKind};

/// Immutable audit record for one transaction that reached the gateway.
///
/// One record is produced per successfully transported attempt and handed to
/// the persistence collaborator; it is never mutated afterwards. Response
/// fields the gateway omitted are `None` - omission is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Order reference echoed back through COMMENT1.
    pub comment1: String,
    /// Transaction kind as submitted on the wire (a reference transaction
    /// is recorded as a sale).
    pub trxtype: TransactionKind,
    /// Payment instrument, when the kind carries one.
    pub tender: Option<Tender>,
    /// Amount exactly as submitted, formatted to two decimal places.
    pub amount: Option<String>,
    /// Gateway-assigned primary reference (PNREF), used to address this
    /// transaction in later captures, credits and voids.
    pub pnref: Option<String>,
    /// Gateway-assigned secondary reference (PPREF).
    pub ppref: Option<String>,
    /// Card-verification match flag (CVV2MATCH).
    pub cvv2_match: Option<String>,
    /// Address-verification flag for the street address (AVSADDR).
    pub avs_addr: Option<String>,
    /// Address-verification flag for the zip code (AVSZIP).
    pub avs_zip: Option<String>,
    /// Numeric result code returned by the gateway; `"0"` means approved.
    pub result_code: String,
    /// Human-readable response message (RESPMSG).
    pub response_message: Option<String>,
    /// Authorization code (AUTHCODE).
    pub auth_code: Option<String>,
    /// Exact request payload sent on the final attempt. Contains
    /// credentials; must not be logged in production.
    pub raw_request: String,
    /// Exact response body received.
    pub raw_response: String,
    /// Wall-clock milliseconds from first attempt start to final response.
    pub response_time_ms: f64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl TransactionResult {
    /// Whether the gateway approved the transaction.
    pub fn is_approved(&self) -> bool {
        self.result_code == "0"
    }
}
