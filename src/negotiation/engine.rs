//! Negotiation engine: applies the threshold policy to one live session
//!
//! The engine owns the session slot, the simulated seller think-time, and
//! the commit hook that reports accepted prices to the cart collaborator.
//! Policy math lives in [`super::policy`]; the engine contributes timing and
//! the stale-resolution guard.

use crate::error::{BargainError, Result};
use crate::types::{Price, Product};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time;

use super::policy::NegotiationPolicy;
use super::session::{NegotiationSession, MSG_INVALID_OFFER};
use super::types::Decision;

/// Called once per accepted session with the product and the agreed price.
/// Fire-and-forget: the engine never retries and never inspects the result.
pub type CommitHook = Arc<dyn Fn(&Product, Price) + Send + Sync>;

struct EngineState {
    session: Option<NegotiationSession>,
    epoch: u64,
}

/// Drives price negotiation for the product currently under discussion.
///
/// One session is live at a time; opening a product replaces whatever came
/// before it. Operations are serialized through the internal mutex, and a
/// resolution that lands after its session was replaced is discarded via the
/// epoch check.
#[derive(Clone)]
pub struct NegotiationEngine {
    state: Arc<Mutex<EngineState>>,
    policy: NegotiationPolicy,
    commit: CommitHook,
}

impl NegotiationEngine {
    /// Create an engine with the given policy and commit hook.
    pub fn new(policy: NegotiationPolicy, commit: CommitHook) -> Self {
        Self {
            state: Arc::new(Mutex::new(EngineState {
                session: None,
                epoch: 0,
            })),
            policy,
            commit,
        }
    }

    /// The active policy
    pub fn policy(&self) -> &NegotiationPolicy {
        &self.policy
    }

    /// Start a fresh session for `product`, discarding any prior session.
    ///
    /// Any offer still being evaluated against the old session will resolve
    /// to [`Decision::Superseded`] without touching the new one.
    pub async fn open(&self, product: Product) -> NegotiationSession {
        let mut state = self.state.lock().await;
        state.epoch += 1;

        let session = NegotiationSession::new(product, state.epoch);
        tracing::info!(
            product = %session.product().id,
            listed = %session.listed_price(),
            "negotiation opened"
        );
        state.session = Some(session.clone());
        session
    }

    /// Drop the current session (buyer closed the dialog).
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        if state.session.take().is_some() {
            tracing::debug!("negotiation closed");
        }
    }

    /// Snapshot of the current session, if one is open.
    pub async fn session(&self) -> Option<NegotiationSession> {
        self.state.lock().await.session.clone()
    }

    /// Submit a buyer-typed offer against the open session.
    ///
    /// A parseable offer moves the session to `Pending` immediately, then
    /// resolves after the policy's decision delay. Malformed input yields
    /// `Decision::Invalid` without advancing the session; submitting after
    /// acceptance is an invalid-state error.
    pub async fn submit_offer(&self, raw: &str) -> Result<Decision> {
        let (offer, epoch) = {
            let mut state = self.state.lock().await;
            let session = state.session.as_mut().ok_or_else(|| {
                BargainError::SessionNotFound("open a product before making an offer".to_string())
            })?;

            match Price::parse(raw) {
                Ok(offer) => {
                    session.begin_offer(offer)?;
                    tracing::info!(
                        product = %session.product().id,
                        %offer,
                        "offer submitted"
                    );
                    (offer, session.epoch())
                }
                Err(err) => {
                    tracing::debug!(input = raw, %err, "malformed offer");
                    session.mark_invalid();
                    return Ok(Decision::Invalid {
                        message: MSG_INVALID_OFFER.to_string(),
                    });
                }
            }
        };

        // Simulated seller think-time. The lock is released while waiting so
        // the caller can render the pending state or reset the session.
        time::sleep(self.policy.decision_delay()).await;

        let mut state = self.state.lock().await;
        let session = match state.session.as_mut() {
            Some(session) if session.epoch() == epoch => session,
            _ => {
                tracing::debug!(%offer, "discarding resolution for superseded session");
                return Ok(Decision::Superseded);
            }
        };

        let outcome = self.policy.evaluate(session.listed_price(), offer);
        let decision = session.resolve(outcome)?;

        match &decision {
            Decision::Accepted { price, .. } => {
                tracing::info!(product = %session.product().id, %price, "offer accepted");
                (self.commit)(session.product(), *price);
            }
            Decision::Countered { counter, .. } => {
                tracing::info!(product = %session.product().id, %counter, "counter offered");
            }
            Decision::Rejected { .. } => {
                tracing::info!(product = %session.product().id, %offer, "offer rejected");
            }
            Decision::Invalid { .. } | Decision::Superseded => {}
        }

        Ok(decision)
    }

    /// Accept the counter-offer on the table.
    ///
    /// Valid only while the session is `Countered`; anything else is an
    /// invalid-state error with no mutation.
    pub async fn accept_counter(&self) -> Result<Decision> {
        let mut state = self.state.lock().await;
        let session = state.session.as_mut().ok_or_else(|| {
            BargainError::SessionNotFound("no negotiation in progress".to_string())
        })?;

        let decision = session.accept_counter()?;

        if let Decision::Accepted { price, .. } = &decision {
            tracing::info!(product = %session.product().id, %price, "counter accepted");
            (self.commit)(session.product(), *price);
        }

        Ok(decision)
    }
}
