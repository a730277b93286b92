//! Negotiation session state

use crate::error::{BargainError, Result};
use crate::types::{Price, Product};
use serde::Serialize;
use std::time::SystemTime;

use super::types::{AcceptKind, Decision, NegotiationStatus, Outcome};

pub(crate) const MSG_INVALID_OFFER: &str = "Please enter a valid offer.";
pub(crate) const MSG_SUBMITTING: &str = "Submitting your offer...";
pub(crate) const MSG_REJECTED: &str =
    "We appreciate your offer, but it is too low for us to accept at this time.";

/// Negotiation state for one product and one buyer.
///
/// Sessions are short-lived, in-memory values owned by the engine; a new
/// session replaces the old one whenever the buyer switches products or
/// reopens the dialog. The `epoch` ties in-flight resolutions to the session
/// they were submitted against.
#[derive(Clone, Debug, Serialize)]
pub struct NegotiationSession {
    product: Product,
    status: NegotiationStatus,
    last_offer: Option<Price>,
    counter_offer: Option<Price>,
    accepted_price: Option<Price>,
    message: String,
    epoch: u64,
    created_at: SystemTime,
}

impl NegotiationSession {
    pub(crate) fn new(product: Product, epoch: u64) -> Self {
        Self {
            product,
            status: NegotiationStatus::Idle,
            last_offer: None,
            counter_offer: None,
            accepted_price: None,
            message: String::new(),
            epoch,
            created_at: SystemTime::now(),
        }
    }

    /// The product under negotiation
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The seller's asking price, fixed for the session's lifetime
    pub fn listed_price(&self) -> Price {
        self.product.price
    }

    /// Current status
    pub fn status(&self) -> NegotiationStatus {
        self.status
    }

    /// Most recent buyer offer; retained across rounds for history
    pub fn last_offer(&self) -> Option<Price> {
        self.last_offer
    }

    /// The counter on the table, present only while `Countered`
    pub fn counter_offer(&self) -> Option<Price> {
        self.counter_offer
    }

    /// The agreed price, set exactly once on acceptance
    pub fn accepted_price(&self) -> Option<Price> {
        self.accepted_price
    }

    /// Buyer-facing explanation of the current status
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Session identity for the stale-resolution guard
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Check if the negotiation ended in acceptance
    pub fn is_accepted(&self) -> bool {
        self.status.is_terminal()
    }

    /// Record a valid offer and move to `Pending`.
    pub(crate) fn begin_offer(&mut self, offer: Price) -> Result<()> {
        if self.status.is_terminal() {
            return Err(BargainError::InvalidStateTransition(
                "the session already ended in acceptance".to_string(),
            ));
        }
        if self.status.is_pending() {
            return Err(BargainError::InvalidStateTransition(
                "an offer is already being evaluated".to_string(),
            ));
        }

        self.last_offer = Some(offer);
        self.counter_offer = None;
        self.status = NegotiationStatus::Pending;
        self.message = MSG_SUBMITTING.to_string();
        Ok(())
    }

    /// Record a malformed offer: guidance message only, status back to idle
    /// for the next attempt. An in-flight evaluation is left undisturbed.
    pub(crate) fn mark_invalid(&mut self) {
        if !self.status.is_pending() {
            self.status = NegotiationStatus::Idle;
        }
        self.message = MSG_INVALID_OFFER.to_string();
    }

    /// Apply a policy outcome to the pending offer.
    pub(crate) fn resolve(&mut self, outcome: Outcome) -> Result<Decision> {
        if !self.status.is_pending() {
            return Err(BargainError::InvalidStateTransition(
                "no offer is awaiting a decision".to_string(),
            ));
        }

        let decision = match outcome {
            Outcome::Accept { kind } => {
                let price = self.last_offer.ok_or_else(|| {
                    BargainError::Internal("pending session has no offer recorded".to_string())
                })?;
                let message = match kind {
                    AcceptKind::FullPrice => {
                        format!("We've accepted your offer of {price}!")
                    }
                    AcceptKind::NearFull => {
                        format!("Great news! Your offer of {price} has been accepted.")
                    }
                };
                self.status = NegotiationStatus::Accepted;
                self.accepted_price = Some(price);
                self.counter_offer = None;
                self.message = message.clone();
                Decision::Accepted { price, message }
            }
            Outcome::Counter { counter } => {
                let message = format!("Your offer is a bit low. We can offer it for {counter}.");
                self.status = NegotiationStatus::Countered;
                self.counter_offer = Some(counter);
                self.message = message.clone();
                Decision::Countered { counter, message }
            }
            Outcome::Reject => {
                self.status = NegotiationStatus::Rejected;
                self.counter_offer = None;
                self.message = MSG_REJECTED.to_string();
                Decision::Rejected {
                    message: MSG_REJECTED.to_string(),
                }
            }
        };

        Ok(decision)
    }

    /// Accept the counter on the table.
    pub(crate) fn accept_counter(&mut self) -> Result<Decision> {
        if self.status != NegotiationStatus::Countered {
            return Err(BargainError::InvalidStateTransition(
                "cannot accept a counter that was never offered".to_string(),
            ));
        }

        let price = self.counter_offer.ok_or_else(|| {
            BargainError::Internal("countered session has no counter recorded".to_string())
        })?;
        let message = format!("Excellent! {price} is yours. The item has been added to your cart.");

        self.status = NegotiationStatus::Accepted;
        self.accepted_price = Some(price);
        self.counter_offer = None;
        self.message = message.clone();

        Ok(Decision::Accepted { price, message })
    }
}
