//! Simulated tracking back office.
//!
//! - Waits a configurable latency before answering, like a remote call would.
//! - Tracking numbers starting with a sentinel prefix fail on purpose.

use std::time::Duration;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{entities::ShipmentSnapshot, tracking::mock_shipment};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
pub const DEFAULT_NOT_FOUND_PREFIX: &str = "ERROR";
pub const DEFAULT_UNAVAILABLE_PREFIX: &str = "DELAY";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrackingError {
    #[error("Tracking number not found in our system")]
    NotFound,
    #[error("Tracking information is temporarily unavailable")]
    TemporarilyUnavailable,
}

/// How the simulated desk behaves: how long it stalls and which inputs fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationPolicy {
    pub latency: Duration,
    pub not_found_prefix: String,
    pub unavailable_prefix: String,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            not_found_prefix: DEFAULT_NOT_FOUND_PREFIX.to_string(),
            unavailable_prefix: DEFAULT_UNAVAILABLE_PREFIX.to_string(),
        }
    }
}

impl SimulationPolicy {
    /// Same sentinels, no waiting. Handy for tests.
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

// An empty prefix disables its sentinel instead of matching everything.
fn has_sentinel(number: &str, prefix: &str) -> bool {
    !prefix.is_empty() && number.starts_with(prefix)
}

#[derive(Clone, Debug, Default)]
pub struct MockDesk {
    policy: SimulationPolicy,
}

impl MockDesk {
    pub fn new(policy: SimulationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }

    /// Answers a lookup synchronously. `number` is expected to be validated
    /// (trimmed, non-empty) already.
    pub fn resolve(
        &self,
        number: &str,
        now: OffsetDateTime,
    ) -> Result<ShipmentSnapshot, TrackingError> {
        if has_sentinel(number, &self.policy.not_found_prefix) {
            return Err(TrackingError::NotFound);
        }
        if has_sentinel(number, &self.policy.unavailable_prefix) {
            return Err(TrackingError::TemporarilyUnavailable);
        }
        Ok(mock_shipment(number, now))
    }

    /// Stalls for the configured latency, then resolves against `now`.
    pub async fn track(
        &self,
        number: &str,
        now: OffsetDateTime,
    ) -> Result<ShipmentSnapshot, TrackingError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, number, latency_ms = self.policy.latency.as_millis() as u64, "tracking lookup started");

        if !self.policy.latency.is_zero() {
            tokio::time::sleep(self.policy.latency).await;
        }

        let outcome = self.resolve(number, now);
        match &outcome {
            Ok(snapshot) => info!(%request_id, number, events = snapshot.events.len(), "tracking lookup resolved"),
            Err(err) => warn!(%request_id, number, error = %err, "tracking lookup failed"),
        }
        outcome
    }
}
