//! Bargain Storefront Library
//!
//! The non-presentational logic of a storefront with negotiable prices:
//! - a price negotiation engine that evaluates buyer offers against a
//!   threshold policy and drives the multi-step offer/counter exchange
//! - product catalog and cart collaborators at the engine's boundary
//! - a mock phone/OTP login gate
//!
//! Rendering, routing, payments, and persistence are left to callers.

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod login;
pub mod negotiation;
pub mod types;

// Re-export commonly used types
pub use error::{BargainError, Result};
pub use negotiation::{
    Decision, NegotiationEngine, NegotiationPolicy, NegotiationSession, NegotiationStatus,
};
pub use types::{Price, Product, ProductId};
