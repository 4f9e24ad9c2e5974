//! Fault observability collaborator.
//!
//! Every transport failure and every non-success HTTP status is reported
//! here before it is converted into a typed error. This is telemetry only;
//! nothing an observer does can change control flow.

use crate::transport::TransportFault;

/// Sink for gateway communication faults.
///
/// Implementations forward to whatever error tracker the host process uses.
/// Callbacks are invoked inline on the submitting task and should return
/// quickly.
pub trait FaultObserver: Send + Sync {
    /// A transport-level failure on the given attempt (1-based). The
    /// attempt may still be retried.
    fn transport_failure(&self, attempt: u32, fault: &TransportFault);

    /// The gateway answered with a non-success HTTP status. Terminal.
    fn http_failure(&self, status: u16);
}

/// Default observer: reports faults through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFaultObserver;

impl FaultObserver for TracingFaultObserver {
    fn transport_failure(&self, attempt: u32, fault: &TransportFault) {
        tracing::error!(attempt, error = %fault, "transport failure while contacting Payflow");
    }

    fn http_failure(&self, status: u16) {
        tracing::error!(status, "Payflow returned a non-success HTTP status");
    }
}
