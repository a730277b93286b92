//! Threshold policy for offer evaluation
//!
//! The policy is the deterministic half of the engine: given a listed price
//! and an offer, it decides accept, counter, or reject with no I/O and no
//! clock. Thresholds are expressed in basis points and evaluated with
//! integer arithmetic so band boundaries are exact.

use crate::error::{BargainError, Result};
use crate::types::Price;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{AcceptKind, Outcome};

/// Offers at or above this fraction of list are accepted outright.
pub const DEFAULT_ACCEPT_BPS: u16 = 9_000;
/// Offers at or above this fraction of list draw a counter-offer.
pub const DEFAULT_COUNTER_FLOOR_BPS: u16 = 7_000;
/// Counter-offers are this fraction of list, rounded up to a whole unit.
pub const DEFAULT_COUNTER_RATE_BPS: u16 = 9_200;
/// Simulated seller think-time between submission and resolution.
pub const DEFAULT_DECISION_DELAY: Duration = Duration::from_millis(1_500);

/// Negotiation policy thresholds and timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationPolicy {
    accept_bps: u16,
    counter_floor_bps: u16,
    counter_rate_bps: u16,
    decision_delay: Duration,
}

impl NegotiationPolicy {
    /// Build a policy, validating that the thresholds form sane bands.
    pub fn new(
        accept_bps: u16,
        counter_floor_bps: u16,
        counter_rate_bps: u16,
        decision_delay: Duration,
    ) -> Result<Self> {
        if accept_bps > 10_000 {
            return Err(BargainError::InvalidConfig(format!(
                "accept_bps must be at most 10000, got {accept_bps}"
            )));
        }
        if counter_floor_bps > accept_bps {
            return Err(BargainError::InvalidConfig(format!(
                "counter_floor_bps ({counter_floor_bps}) must not exceed accept_bps ({accept_bps})"
            )));
        }
        if counter_rate_bps == 0 || counter_rate_bps >= 10_000 {
            return Err(BargainError::InvalidConfig(format!(
                "counter_rate_bps must be in (0, 10000), got {counter_rate_bps}"
            )));
        }

        Ok(Self {
            accept_bps,
            counter_floor_bps,
            counter_rate_bps,
            decision_delay,
        })
    }

    /// Same policy with a different decision delay (shortened in tests).
    pub fn with_decision_delay(mut self, decision_delay: Duration) -> Self {
        self.decision_delay = decision_delay;
        self
    }

    /// Simulated think-time before an offer resolves.
    pub fn decision_delay(&self) -> Duration {
        self.decision_delay
    }

    /// Evaluate a single offer against a listed price.
    ///
    /// Every threshold uses `>=`, so an offer exactly on a boundary lands in
    /// the more favorable band. The two acceptance checks overlap by design;
    /// they differ only in the message the caller shows.
    pub fn evaluate(&self, listed: Price, offer: Price) -> Outcome {
        if offer >= listed {
            Outcome::Accept {
                kind: AcceptKind::FullPrice,
            }
        } else if at_least_fraction(offer, listed, self.accept_bps) {
            Outcome::Accept {
                kind: AcceptKind::NearFull,
            }
        } else if at_least_fraction(offer, listed, self.counter_floor_bps) {
            Outcome::Counter {
                counter: self.counter_for(listed),
            }
        } else {
            Outcome::Reject
        }
    }

    /// The counter-offer for a listed price: `counter_rate` of list, rounded
    /// up to the nearest whole currency unit. Depends on the listed price
    /// alone, never on the offer that triggered it.
    pub fn counter_for(&self, listed: Price) -> Price {
        let scaled = listed.cents() as u128 * self.counter_rate_bps as u128;
        // bps * cents-per-unit
        let per_unit: u128 = 10_000 * 100;
        let whole_units = scaled.div_ceil(per_unit);
        Price::from_cents((whole_units * 100) as u64)
    }
}

impl Default for NegotiationPolicy {
    fn default() -> Self {
        Self {
            accept_bps: DEFAULT_ACCEPT_BPS,
            counter_floor_bps: DEFAULT_COUNTER_FLOOR_BPS,
            counter_rate_bps: DEFAULT_COUNTER_RATE_BPS,
            decision_delay: DEFAULT_DECISION_DELAY,
        }
    }
}

/// Exact integer check for `offer >= (bps / 10000) * listed`.
fn at_least_fraction(offer: Price, listed: Price, bps: u16) -> bool {
    offer.cents() as u128 * 10_000 >= listed.cents() as u128 * bps as u128
}
