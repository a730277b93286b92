//! Shopping cart: the commit target for accepted negotiations

use crate::types::{Price, Product};
use serde::Serialize;

/// A product committed to the cart at an agreed price.
///
/// `price_paid` may sit below the listed price when the item arrived via a
/// successful negotiation.
#[derive(Clone, Debug, Serialize)]
pub struct CartItem {
    pub product: Product,
    pub price_paid: Price,
}

/// In-memory cart for one buyer session.
///
/// Adds never fail and are never deduplicated; the negotiation engine
/// commits each accepted session exactly once.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item at the given price.
    pub fn add(&mut self, product: Product, price_paid: Price) {
        tracing::debug!(product = %product.id, %price_paid, "added to cart");
        self.items.push(CartItem {
            product,
            price_paid,
        });
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of line items (the header badge count)
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of prices paid
    pub fn total(&self) -> Price {
        Price::from_cents(self.items.iter().map(|i| i.price_paid.cents()).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(dollars: u64) -> Product {
        Product::new(
            "Ceramic Mug",
            "Stoneware, 350ml",
            Price::from_dollars(dollars),
            "https://example.com/img/mug.jpg",
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::from_cents(0));
    }

    #[test]
    fn test_add_at_negotiated_price() {
        let mut cart = Cart::new();
        cart.add(product(100), Price::from_dollars(92));

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.items()[0].price_paid, Price::from_dollars(92));
        assert_eq!(cart.total(), Price::from_dollars(92));
    }

    #[test]
    fn test_total_sums_prices_paid() {
        let mut cart = Cart::new();
        cart.add(product(100), Price::from_dollars(100));
        cart.add(product(250), Price::from_dollars(230));

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Price::from_dollars(330));
    }

    #[test]
    fn test_same_product_twice_keeps_both_lines() {
        let item = product(50);
        let mut cart = Cart::new();
        cart.add(item.clone(), Price::from_dollars(50));
        cart.add(item, Price::from_dollars(45));

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Price::from_dollars(95));
    }
}
