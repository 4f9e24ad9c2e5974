//! HTTP transport for the name-value wire format.
//!
//! One [`Transport::send`] call is one unit of work: encode once, POST,
//! retry transport-level failures up to the attempt limit, classify the
//! outcome, decode the body. The HTTP call itself sits behind the
//! [`HttpSend`] seam so the retry and classification logic is testable
//! without a network.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;

use crate::codec;
use crate::error::{GatewayError, Result};
use crate::fields::FieldSet;
use crate::observe::{FaultObserver, TracingFaultObserver};

/// Content type identifying the name-value wire format. Payflow does not
/// accept standard form encoding.
pub const NAMEVALUE_CONTENT_TYPE: &str = "text/namevalue; charset=utf-8";

/// A transport-level failure: connection refused, DNS error, timeout, TLS
/// failure. These are the only failures that get retried.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportFault(String);

impl TransportFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(error: reqwest::Error) -> Self {
        Self(error.to_string())
    }
}

/// A received HTTP response, status not yet interpreted.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The HTTP seam. Production code uses [`HttpClient`]; tests substitute a
/// scripted double.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> std::result::Result<HttpResponse, TransportFault>;
}

#[async_trait]
impl<T: HttpSend + ?Sized> HttpSend for Arc<T> {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> std::result::Result<HttpResponse, TransportFault> {
        (**self).post(url, content_type, body).await
    }
}

/// [`HttpSend`] implementation over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-configured client, eg to set connection timeouts.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for HttpClient {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: &str,
    ) -> std::result::Result<HttpResponse, TransportFault> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body.to_string())
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Retry behavior for transport-level failures.
///
/// Retries are immediate - the wire protocol specifies no backoff. Be
/// aware of the double-submission risk: the gateway may have processed a
/// request whose response was lost in transit, so submissions that are not
/// idempotent on the gateway side should run with `max_attempts = 1`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first (default: 3).
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

/// Run `operation` up to the policy's attempt limit, returning the first
/// success or the last error. The closure receives the 1-based attempt
/// number. A limit of zero is treated as one attempt.
pub async fn retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> std::result::Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(attempt, "gateway request succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) => {
                tracing::warn!(attempt, max_attempts, error = %error, "gateway request attempt failed");
                if attempt >= max_attempts {
                    return Err(error);
                }
                attempt += 1;
            }
        }
    }
}

/// Everything a completed round-trip produced: the decoded response fields
/// plus the audit material (exact payload, exact body, elapsed time).
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Decoded response fields.
    pub fields: FieldSet,
    /// Exact request payload sent.
    pub raw_request: String,
    /// Exact response body received.
    pub raw_response: String,
    /// Wall-clock milliseconds from first attempt start to final response.
    pub response_time_ms: f64,
}

/// Performs the POST with bounded retry and failure classification.
///
/// Holds no mutable state across calls; concurrent sends are independent.
pub struct Transport<H: HttpSend> {
    http: H,
    policy: RetryPolicy,
    observer: Arc<dyn FaultObserver>,
}

impl<H: HttpSend> Transport<H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            policy: RetryPolicy::default(),
            observer: Arc::new(TracingFaultObserver),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn FaultObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Submit `fields` to `url` and return the completed exchange.
    ///
    /// Transport-level failures are retried immediately up to the policy's
    /// attempt limit; exhaustion fails with
    /// [`GatewayError::GatewayUnavailable`]. A received non-success HTTP
    /// status is terminal and is never retried. Every failure is reported
    /// to the fault observer before the typed error is returned.
    pub async fn send(&self, url: &str, fields: &FieldSet) -> Result<Exchange> {
        let payload = codec::encode(fields);
        let payload_ref = payload.as_str();
        let started = Instant::now();

        let outcome = retry(&self.policy, |attempt| async move {
            match self.http.post(url, NAMEVALUE_CONTENT_TYPE, payload_ref).await {
                Ok(response) => Ok(response),
                Err(fault) => {
                    self.observer.transport_failure(attempt, &fault);
                    Err(fault)
                }
            }
        })
        .await;

        let response = outcome.map_err(|fault| {
            GatewayError::GatewayUnavailable(format!(
                "giving up after {} attempts: {fault}",
                self.policy.max_attempts.max(1)
            ))
        })?;
        let response_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        if !(200..300).contains(&response.status) {
            self.observer.http_failure(response.status);
            return Err(GatewayError::GatewayUnavailable(format!(
                "HTTP status {}",
                response.status
            )));
        }

        Ok(Exchange {
            fields: codec::decode(&response.body),
            raw_request: payload,
            raw_response: response.body,
            response_time_ms,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// Scripted [`HttpSend`] double. Steps are consumed in order; the last
    /// step repeats once the script is exhausted.
    pub(crate) struct ScriptedHttp {
        calls: AtomicU32,
        last_request: Mutex<Option<String>>,
        script: Mutex<VecDeque<std::result::Result<HttpResponse, TransportFault>>>,
    }

    impl ScriptedHttp {
        pub(crate) fn script(
            steps: Vec<std::result::Result<HttpResponse, TransportFault>>,
        ) -> Self {
            assert!(!steps.is_empty(), "script needs at least one step");
            Self {
                calls: AtomicU32::new(0),
                last_request: Mutex::new(None),
                script: Mutex::new(steps.into()),
            }
        }

        /// Always answer with the given status and body.
        pub(crate) fn respond_with(status: u16, body: &str) -> Self {
            Self::script(vec![Ok(HttpResponse {
                status,
                body: body.to_string(),
            })])
        }

        /// Fail every attempt at the transport level.
        pub(crate) fn always_failing() -> Self {
            Self::script(vec![Err(TransportFault::new("connection refused"))])
        }

        pub(crate) fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_request(&self) -> Option<String> {
            self.last_request.lock().clone()
        }
    }

    #[async_trait]
    impl HttpSend for ScriptedHttp {
        async fn post(
            &self,
            _url: &str,
            _content_type: &str,
            body: &str,
        ) -> std::result::Result<HttpResponse, TransportFault> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock() = Some(body.to_string());
            let mut script = self.script.lock();
            if script.len() > 1 {
                script.pop_front().unwrap()
            } else {
                script.front().cloned().unwrap()
            }
        }
    }

    /// [`FaultObserver`] that counts notifications.
    #[derive(Default)]
    pub(crate) struct CountingObserver {
        pub(crate) transport_failures: AtomicU32,
        pub(crate) http_failures: AtomicU32,
    }

    impl FaultObserver for CountingObserver {
        fn transport_failure(&self, _attempt: u32, _fault: &TransportFault) {
            self.transport_failures.fetch_add(1, Ordering::SeqCst);
        }

        fn http_failure(&self, _status: u16) {
            self.http_failures.fetch_add(1, Ordering::SeqCst);
        }
    }
}
