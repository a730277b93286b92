//! Negotiation types and state machine

use crate::types::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Negotiation session status.
///
/// `Accepted` is the only terminal status: a buyer whose offer was rejected
/// or countered may submit a fresh offer in the same session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationStatus {
    /// Waiting for the buyer's first (or next) offer.
    #[default]
    Idle,
    /// An offer has been submitted and is being evaluated.
    Pending,
    /// The last offer was below the floor; the buyer may try again.
    Rejected,
    /// A counter-offer is on the table.
    Countered,
    /// A price was agreed (terminal).
    Accepted,
}

impl NegotiationStatus {
    /// Check if the session is in a terminal status
    pub const fn is_terminal(&self) -> bool {
        matches!(self, NegotiationStatus::Accepted)
    }

    /// Check if the session can still take offers
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Check if an offer is currently being evaluated
    pub const fn is_pending(&self) -> bool {
        matches!(self, NegotiationStatus::Pending)
    }

    /// Returns true if moving from `self` to `target` is a legal transition.
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Pending)
                | (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Countered)
                | (Self::Pending, Self::Rejected)
                | (Self::Rejected, Self::Pending)
                | (Self::Countered, Self::Pending)
                | (Self::Countered, Self::Accepted)
        )
    }
}

impl fmt::Display for NegotiationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Countered => "countered",
            Self::Accepted => "accepted",
        };
        write!(f, "{s}")
    }
}

/// Which acceptance rule matched.
///
/// The at-or-above-list rule and the near-full rule overlap on purpose; they
/// produce the same outcome and differ only in the buyer-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptKind {
    /// The offer met or exceeded the listed price.
    FullPrice,
    /// The offer was within the near-full acceptance band.
    NearFull,
}

/// Verdict of the pure threshold policy for a single offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Accept { kind: AcceptKind },
    Counter { counter: Price },
    Reject,
}

/// Caller-visible result of a negotiation operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The offer was malformed; the session was not advanced.
    Invalid { message: String },
    /// The seller accepted; `price` is what the caller should commit.
    Accepted { price: Price, message: String },
    /// The seller countered with an alternative price.
    Countered { counter: Price, message: String },
    /// The offer was too low; the buyer may try again.
    Rejected { message: String },
    /// The session was reset or replaced while the offer was being
    /// evaluated; the resolution was discarded.
    Superseded,
}

impl Decision {
    /// Check if this decision ended in acceptance
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }

    /// Buyer-facing message, if the decision carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            Decision::Invalid { message }
            | Decision::Accepted { message, .. }
            | Decision::Countered { message, .. }
            | Decision::Rejected { message } => Some(message),
            Decision::Superseded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(NegotiationStatus::Accepted.is_terminal());
        assert!(!NegotiationStatus::Accepted.is_active());

        for status in [
            NegotiationStatus::Idle,
            NegotiationStatus::Pending,
            NegotiationStatus::Rejected,
            NegotiationStatus::Countered,
        ] {
            assert!(!status.is_terminal());
            assert!(status.is_active());
        }
    }

    #[test]
    fn test_status_transitions() {
        use NegotiationStatus::*;

        assert!(Idle.can_transition_to(Pending));
        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Countered));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(Pending));
        assert!(Countered.can_transition_to(Pending));
        assert!(Countered.can_transition_to(Accepted));

        // Accepted is terminal
        for target in [Idle, Pending, Rejected, Countered, Accepted] {
            assert!(!Accepted.can_transition_to(target));
        }

        assert!(!Idle.can_transition_to(Accepted));
        assert!(!Idle.can_transition_to(Idle));
        assert!(!Rejected.can_transition_to(Accepted));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(NegotiationStatus::Idle.to_string(), "idle");
        assert_eq!(NegotiationStatus::Countered.to_string(), "countered");
        assert_eq!(NegotiationStatus::Accepted.to_string(), "accepted");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&NegotiationStatus::Countered).unwrap();
        assert_eq!(json, "\"countered\"");

        let back: NegotiationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NegotiationStatus::Countered);
    }

    #[test]
    fn test_decision_accessors() {
        let accepted = Decision::Accepted {
            price: Price::from_dollars(92),
            message: "done".to_string(),
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.message(), Some("done"));

        assert!(!Decision::Superseded.is_accepted());
        assert_eq!(Decision::Superseded.message(), None);
    }
}
