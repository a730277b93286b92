//! Error types for Bargain

use thiserror::Error;

/// Main error type for Bargain
#[derive(Error, Debug)]
pub enum BargainError {
    // Negotiation errors
    #[error("No negotiation session is open: {0}")]
    SessionNotFound(String),

    #[error("Invalid negotiation state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Invalid offer: {0}")]
    InvalidOffer(String),

    // Login errors
    #[error("Invalid mobile number: {0}")]
    InvalidPhone(String),

    #[error("Invalid OTP: {0}")]
    InvalidOtp(String),

    // Catalog errors
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Bargain operations
pub type Result<T> = std::result::Result<T, BargainError>;
