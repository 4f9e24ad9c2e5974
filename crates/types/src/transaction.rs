use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of transaction kinds the gateway understands.
///
/// Each kind maps to a single-letter TRXTYPE code on the wire. A reference
/// transaction - capturing against the card details stored for a previous
/// transaction - has no dedicated TRXTYPE; Payflow expects it as an ordinary
/// sale carrying an `ORIGID`, so [`TransactionKind::wire_kind`] collapses
/// `Reference` to `Sale` when the payload is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Hold funds on the customer's bankcard without settling.
    Authorization,
    /// Authorize and mark for settlement immediately.
    Sale,
    /// Settle funds held by a previous authorization.
    DelayedCapture,
    /// New sale against the card details of a previous transaction.
    Reference,
    /// Refund money back to a bankcard.
    Credit,
    /// Prevent a previous transaction from being settled.
    Void,
}

impl TransactionKind {
    /// The TRXTYPE code submitted to the gateway.
    pub fn trxtype(self) -> &'static str {
        match self {
            Self::Authorization => "A",
            Self::Sale | Self::Reference => "S",
            Self::DelayedCapture => "D",
            Self::Credit => "C",
            Self::Void => "V",
        }
    }

    /// The kind as it appears on the wire. `Reference` is submitted as a
    /// sale; every other kind is its own wire kind.
    pub fn wire_kind(self) -> TransactionKind {
        match self {
            Self::Reference => Self::Sale,
            other => other,
        }
    }

    /// Parse a TRXTYPE code back into a kind.
    ///
    /// `"S"` always parses to [`TransactionKind::Sale`]; the wire format
    /// cannot distinguish a reference transaction from a direct sale.
    pub fn from_trxtype(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::Authorization),
            "S" => Some(Self::Sale),
            "D" => Some(Self::DelayedCapture),
            "C" => Some(Self::Credit),
            "V" => Some(Self::Void),
            _ => None,
        }
    }

    /// Human-readable name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Sale => "sale",
            Self::DelayedCapture => "delayed capture",
            Self::Reference => "reference transaction",
            Self::Credit => "credit",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payment instrument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tender {
    /// Credit or debit card.
    Bankcard,
}

impl Tender {
    /// The TENDER code submitted to the gateway.
    pub fn code(self) -> &'static str {
        match self {
            Self::Bankcard => "C",
        }
    }

    /// Parse a TENDER code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Self::Bankcard),
            _ => None,
        }
    }
}

impl fmt::Display for Tender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bankcard => f.write_str("bankcard"),
        }
    }
}
