//! Core types used throughout Bargain

use crate::error::{BargainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A price in minor currency units (cents).
///
/// All storefront arithmetic is done on whole cents so threshold comparisons
/// are exact. Buyer-typed amounts come in through [`Price::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    /// Create a price from whole cents.
    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Create a price from whole currency units.
    pub const fn from_dollars(dollars: u64) -> Self {
        Price(dollars * 100)
    }

    /// Price in whole cents.
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a buyer-typed amount such as `100`, `92.5`, `92.50`, or `$75`.
    ///
    /// Rejects empty, non-numeric, negative, zero, sub-cent, and overflowing
    /// input. Amounts are capped at two fractional digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(BargainError::InvalidOffer("amount is empty".to_string()));
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(BargainError::InvalidOffer("amount is empty".to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(BargainError::InvalidOffer(format!(
                "not a numeric amount: {raw}"
            )));
        }
        if frac.len() > 2 {
            return Err(BargainError::InvalidOffer(format!(
                "amounts are limited to whole cents: {raw}"
            )));
        }

        let whole_units: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| BargainError::InvalidOffer(format!("amount too large: {raw}")))?
        };

        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().unwrap_or(0) * 10,
            _ => frac.parse::<u64>().unwrap_or(0),
        };

        let cents = whole_units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| BargainError::InvalidOffer(format!("amount too large: {raw}")))?;

        if cents == 0 {
            return Err(BargainError::InvalidOffer(
                "amount must be greater than zero".to_string(),
            ));
        }

        Ok(Price(cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Unique identifier for products (timestamp-based)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    /// Generate a new unique product ID with timestamp
    pub fn generate() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis();

        Self(format!("prod_{}", timestamp))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product listed in the storefront catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// The seller's asking price, fixed per negotiation session.
    pub price: Price,
    pub image_url: String,
}

impl Product {
    /// Create a product with a generated ID.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse_whole() {
        assert_eq!(Price::parse("100").unwrap(), Price::from_cents(10000));
        assert_eq!(Price::parse("$75").unwrap(), Price::from_cents(7500));
    }

    #[test]
    fn test_price_parse_fractional() {
        assert_eq!(Price::parse("92.5").unwrap(), Price::from_cents(9250));
        assert_eq!(Price::parse("92.50").unwrap(), Price::from_cents(9250));
        assert_eq!(Price::parse("69.99").unwrap(), Price::from_cents(6999));
        assert_eq!(Price::parse(".50").unwrap(), Price::from_cents(50));
        assert_eq!(Price::parse("92.").unwrap(), Price::from_cents(9200));
    }

    #[test]
    fn test_price_parse_rejects_junk() {
        assert!(Price::parse("abc").is_err());
        assert!(Price::parse("").is_err());
        assert!(Price::parse("   ").is_err());
        assert!(Price::parse("-5").is_err());
        assert!(Price::parse("12.345").is_err());
        assert!(Price::parse("1e3").is_err());
        assert!(Price::parse("12.3.4").is_err());
    }

    #[test]
    fn test_price_parse_rejects_zero() {
        assert!(Price::parse("0").is_err());
        assert!(Price::parse("0.00").is_err());
        assert!(Price::parse("$0").is_err());
    }

    #[test]
    fn test_price_parse_rejects_overflow() {
        assert!(Price::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(10000).to_string(), "$100.00");
        assert_eq!(Price::from_cents(9200).to_string(), "$92.00");
        assert_eq!(Price::from_cents(6999).to_string(), "$69.99");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_cents(9000) < Price::from_cents(10000));
        assert!(Price::from_dollars(100) == Price::from_cents(10000));
    }

    #[test]
    fn test_product_id_creation() {
        let id1 = ProductId::generate();

        // IDs should start with "prod_"
        assert!(id1.0.starts_with("prod_"));

        // Wait a tiny bit to ensure different timestamp
        std::thread::sleep(std::time::Duration::from_millis(2));

        let id2 = ProductId::generate();

        // IDs should be different (due to timestamp)
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_product_serialization() {
        let product = Product::new(
            "Wireless Headphones",
            "Over-ear, noise cancelling",
            Price::from_dollars(100),
            "https://example.com/headphones.jpg",
        );

        let serialized = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&serialized).unwrap();

        assert_eq!(product, deserialized);
    }
}
