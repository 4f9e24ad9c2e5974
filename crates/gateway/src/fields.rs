//! The ordered field-name to value mapping submitted to the gateway.

use indexmap::IndexMap;

/// Payflow parameter names.
///
/// Field names are case-sensitive; the protocol uses uppercase throughout.
pub mod names {
    // Credentials
    pub const VENDOR: &str = "VENDOR";
    pub const PWD: &str = "PWD";
    pub const USER: &str = "USER";
    pub const PARTNER: &str = "PARTNER";
    pub const CURRENCY: &str = "CURRENCY";

    // Transaction
    pub const TRXTYPE: &str = "TRXTYPE";
    pub const TENDER: &str = "TENDER";
    pub const AMT: &str = "AMT";
    pub const ORIGID: &str = "ORIGID";

    // Bankcard
    pub const ACCT: &str = "ACCT";
    pub const CVV2: &str = "CVV2";
    pub const EXPDATE: &str = "EXPDATE";

    // Audit information (eg order number)
    pub const COMMENT1: &str = "COMMENT1";
    pub const COMMENT2: &str = "COMMENT2";

    // Billing address (only used by the address verification service)
    pub const FIRSTNAME: &str = "FIRSTNAME";
    pub const LASTNAME: &str = "LASTNAME";
    pub const STREET: &str = "STREET";
    pub const CITY: &str = "CITY";
    pub const STATE: &str = "STATE";
    pub const ZIP: &str = "ZIP";
    pub const BILLTOCOUNTRY: &str = "BILLTOCOUNTRY";
    pub const EMAIL: &str = "EMAIL";
    pub const PHONENUM: &str = "PHONENUM";

    // Response
    pub const RESULT: &str = "RESULT";
    pub const RESPMSG: &str = "RESPMSG";
    pub const PNREF: &str = "PNREF";
    pub const PPREF: &str = "PPREF";
    pub const AUTHCODE: &str = "AUTHCODE";
    pub const CVV2MATCH: &str = "CVV2MATCH";
    pub const AVSADDR: &str = "AVSADDR";
    pub const AVSZIP: &str = "AVSZIP";
}

/// An ordered mapping from field name to value.
///
/// Backed by an [`IndexMap`] so the encoded payload is deterministic. No
/// field name is ever repeated: setting a name that is already present
/// replaces its value, which is also how per-call overrides win over
/// configuration defaults.
///
/// Values must not require percent-encoding - the wire format forbids it,
/// and the codec does not sanitize. Passing a value containing `&` or `=`
/// is a caller error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: IndexMap<String, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Set a field only when a value is present.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}
