//! Encoding and decoding of the Payflow name-value wire format.
//!
//! The request side is NOT standard form encoding: Payflow rejects
//! percent-encoded payloads, so pairs are joined raw. The response side is
//! an ordinary querystring and gets standard percent-decoding.

use crate::fields::FieldSet;

/// Encode a field set into the `name=value&name=value` request payload.
///
/// Pairs appear in field-set iteration order and values are written raw -
/// the protocol forbids percent-encoding, so a value containing `&` or `=`
/// corrupts the payload. That is a caller error by contract, not something
/// this function repairs.
pub fn encode(fields: &FieldSet) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a response body into a field set.
///
/// Standard querystring rules: `+` is a space, percent sequences are
/// decoded, the first occurrence wins for a repeated key, and pairs with a
/// blank value or no `=` are dropped (the gateway only sends single-valued,
/// non-blank fields).
pub fn decode(body: &str) -> FieldSet {
    let mut fields = FieldSet::new();
    for pair in body.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let name = decode_component(name);
        if fields.contains(&name) {
            continue;
        }
        fields.set(&name, decode_component(value));
    }
    fields
}

fn decode_component(raw: &str) -> String {
    let unplussed = raw.replace('+', " ");
    match urlencoding::decode(&unplussed) {
        Ok(decoded) => decoded.into_owned(),
        // Invalid percent sequences are kept verbatim rather than dropped.
        Err(_) => unplussed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::names;

    #[test]
    fn test_encode_joins_pairs_in_order() {
        let fields: FieldSet = [("TRXTYPE", "S"), ("AMT", "19.99"), ("COMMENT1", "ORD1")]
            .into_iter()
            .collect();

        assert_eq!(encode(&fields), "TRXTYPE=S&AMT=19.99&COMMENT1=ORD1");
    }

    #[test]
    fn test_encode_leaves_values_raw() {
        // The protocol quirk: nothing is escaped. A delimiter inside a value
        // is the caller's problem and must come through untouched.
        let fields: FieldSet = [("COMMENT1", "a&b=c"), ("AMT", "1.00")].into_iter().collect();

        assert_eq!(encode(&fields), "COMMENT1=a&b=c&AMT=1.00");
    }

    #[test]
    fn test_decode_basic_response() {
        let fields = decode("RESULT=0&RESPMSG=Approved&PNREF=ABC123");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get(names::RESULT), Some("0"));
        assert_eq!(fields.get(names::RESPMSG), Some("Approved"));
        assert_eq!(fields.get(names::PNREF), Some("ABC123"));
    }

    #[test]
    fn test_decode_first_value_wins() {
        let fields = decode("RESULT=0&RESULT=126");
        assert_eq!(fields.get(names::RESULT), Some("0"));
    }

    #[test]
    fn test_decode_percent_and_plus() {
        let fields = decode("RESPMSG=Invalid%20account+number");
        assert_eq!(fields.get(names::RESPMSG), Some("Invalid account number"));
    }

    #[test]
    fn test_decode_drops_blank_values_and_bare_tokens() {
        let fields = decode("PNREF=&RESULT=0&garbage");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(names::RESULT), Some("0"));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_roundtrip_without_reserved_characters() {
        let fields: FieldSet = [
            ("VENDOR", "acme"),
            ("TRXTYPE", "S"),
            ("AMT", "10.00"),
            ("COMMENT1", "ORD-42"),
        ]
        .into_iter()
        .collect();

        assert_eq!(decode(&encode(&fields)), fields);
    }
}
