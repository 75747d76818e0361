use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, ClientError},
        ports::AnalysisTransport,
    },
    food_input::services::InputCollector,
};

/// Sends analysis requests with at most one call in flight at a time.
#[derive(Debug)]
pub struct AnalysisDispatcher<T>
where
    T: AnalysisTransport,
{
    transport: T,
    in_flight: AtomicBool,
}

/// Holds the in-flight flag; released on drop, including when the
/// calling future is cancelled.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl<T> AnalysisDispatcher<T>
where
    T: AnalysisTransport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates the collector state locally, then calls the endpoint.
    /// Validation failures and a busy dispatcher never reach the network.
    pub async fn analyze(&self, collector: &InputCollector) -> Result<AnalysisResult, ClientError> {
        let request = collector.build_request()?;

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(ClientError::InFlight)?;

        self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!("Analysis request failed: {}", e);
        })
    }
}
