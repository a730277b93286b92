//! Negotiation module for storefront price haggling

pub mod engine;
pub mod policy;
pub mod session;
pub mod types;

pub use engine::{CommitHook, NegotiationEngine};
pub use policy::NegotiationPolicy;
pub use session::NegotiationSession;
pub use types::{AcceptKind, Decision, NegotiationStatus, Outcome};
