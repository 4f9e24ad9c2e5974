//! Mapping of a completed exchange into the canonical transaction result.
//!
//! Pure data mapping: no retries, no re-validation. Transport and the
//! validator have already done their jobs by the time this runs.

use chrono::Utc;

use payflow_types::{Tender, TransactionKind, TransactionResult};

use crate::error::{GatewayError, Result};
use crate::fields::{FieldSet, names};
use crate::transport::Exchange;

/// Build the immutable [`TransactionResult`] for one completed attempt.
///
/// Request-side fields (tender, amount, order reference) come from the
/// submitted field set; gateway-side fields come from the decoded response,
/// each defaulting to `None` when omitted. The RESULT code is the one field
/// Payflow returns unconditionally - its absence means the body was not a
/// gateway response at all and is reported as
/// [`GatewayError::MalformedResponse`].
pub fn normalize(kind: TransactionKind, request: &FieldSet, exchange: Exchange) -> Result<TransactionResult> {
    let result_code = exchange
        .fields
        .get(names::RESULT)
        .ok_or(GatewayError::MalformedResponse {
            field: names::RESULT,
        })?
        .to_string();

    let owned = |value: Option<&str>| value.map(str::to_string);

    Ok(TransactionResult {
        comment1: request.get(names::COMMENT1).unwrap_or_default().to_string(),
        trxtype: kind.wire_kind(),
        tender: request.get(names::TENDER).and_then(Tender::from_code),
        amount: owned(request.get(names::AMT)),
        pnref: owned(exchange.fields.get(names::PNREF)),
        ppref: owned(exchange.fields.get(names::PPREF)),
        cvv2_match: owned(exchange.fields.get(names::CVV2MATCH)),
        avs_addr: owned(exchange.fields.get(names::AVSADDR)),
        avs_zip: owned(exchange.fields.get(names::AVSZIP)),
        result_code,
        response_message: owned(exchange.fields.get(names::RESPMSG)),
        auth_code: owned(exchange.fields.get(names::AUTHCODE)),
        raw_request: exchange.raw_request,
        raw_response: exchange.raw_response,
        response_time_ms: exchange.response_time_ms,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    fn exchange(body: &str) -> Exchange {
        Exchange {
            fields: codec::decode(body),
            raw_request: "TRXTYPE=S&AMT=19.99".to_string(),
            raw_response: body.to_string(),
            response_time_ms: 87.5,
        }
    }

    fn sale_request() -> FieldSet {
        [
            ("TRXTYPE", "S"),
            ("TENDER", "C"),
            ("AMT", "19.99"),
            ("COMMENT1", "ORD1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_full_mapping() {
        let body = "RESULT=0&RESPMSG=Approved&PNREF=V19A2A192BE9&PPREF=PP123\
                    &AUTHCODE=010101&CVV2MATCH=Y&AVSADDR=Y&AVSZIP=N";
        let record = normalize(TransactionKind::Sale, &sale_request(), exchange(body)).unwrap();

        assert_eq!(record.comment1, "ORD1");
        assert_eq!(record.trxtype, TransactionKind::Sale);
        assert_eq!(record.tender, Some(Tender::Bankcard));
        assert_eq!(record.amount.as_deref(), Some("19.99"));
        assert_eq!(record.pnref.as_deref(), Some("V19A2A192BE9"));
        assert_eq!(record.ppref.as_deref(), Some("PP123"));
        assert_eq!(record.cvv2_match.as_deref(), Some("Y"));
        assert_eq!(record.avs_addr.as_deref(), Some("Y"));
        assert_eq!(record.avs_zip.as_deref(), Some("N"));
        assert_eq!(record.result_code, "0");
        assert_eq!(record.response_message.as_deref(), Some("Approved"));
        assert_eq!(record.auth_code.as_deref(), Some("010101"));
        assert_eq!(record.raw_request, "TRXTYPE=S&AMT=19.99");
        assert_eq!(record.raw_response, body);
        assert_eq!(record.response_time_ms, 87.5);
        assert!(record.is_approved());
    }

    #[test]
    fn test_omitted_response_fields_default_to_none() {
        let record = normalize(
            TransactionKind::Sale,
            &sale_request(),
            exchange("RESULT=12&RESPMSG=Declined"),
        )
        .unwrap();

        assert_eq!(record.result_code, "12");
        assert_eq!(record.pnref, None);
        assert_eq!(record.ppref, None);
        assert_eq!(record.auth_code, None);
        assert_eq!(record.cvv2_match, None);
        assert!(!record.is_approved());
    }

    #[test]
    fn test_missing_result_is_malformed() {
        let err =
            normalize(TransactionKind::Sale, &sale_request(), exchange("RESPMSG=hello")).unwrap_err();

        assert!(matches!(
            err,
            GatewayError::MalformedResponse {
                field: names::RESULT
            }
        ));
    }

    #[test]
    fn test_reference_is_recorded_as_sale() {
        let request: FieldSet = [
            ("TRXTYPE", "S"),
            ("TENDER", "C"),
            ("ORIGID", "PN1"),
            ("AMT", "30.00"),
            ("COMMENT1", "ORD2"),
        ]
        .into_iter()
        .collect();

        let record =
            normalize(TransactionKind::Reference, &request, exchange("RESULT=0")).unwrap();
        assert_eq!(record.trxtype, TransactionKind::Sale);
    }

    #[test]
    fn test_kind_without_tender_or_amount() {
        let request: FieldSet = [("TRXTYPE", "V"), ("ORIGID", "PN1"), ("COMMENT1", "ORD1")]
            .into_iter()
            .collect();

        let record = normalize(TransactionKind::Void, &request, exchange("RESULT=0")).unwrap();
        assert_eq!(record.trxtype, TransactionKind::Void);
        assert_eq!(record.tender, None);
        assert_eq!(record.amount, None);
    }
}
