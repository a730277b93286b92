//! In-memory product catalog

use crate::error::Result;
use crate::types::{Price, Product, ProductId};
use std::collections::HashMap;

/// Product catalog backing the storefront.
///
/// Supplies listed prices and product identity to the negotiation engine;
/// immutable from the engine's point of view.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a small demo storefront. IDs are stable so they can be passed to
    /// the CLI across runs.
    pub fn with_demo_products() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Product {
            id: ProductId("prod_headphones".to_string()),
            name: "Wireless Headphones".to_string(),
            description: "Over-ear, noise cancelling, 30-hour battery".to_string(),
            price: Price::from_dollars(100),
            image_url: "https://example.com/img/headphones.jpg".to_string(),
        });
        catalog.insert(Product {
            id: ProductId("prod_satchel".to_string()),
            name: "Leather Satchel".to_string(),
            description: "Full-grain leather, brass fittings".to_string(),
            price: Price::from_cents(12999),
            image_url: "https://example.com/img/satchel.jpg".to_string(),
        });
        catalog.insert(Product {
            id: ProductId("prod_keyboard".to_string()),
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless, hot-swappable switches".to_string(),
            price: Price::from_cents(8950),
            image_url: "https://example.com/img/keyboard.jpg".to_string(),
        });
        catalog.insert(Product {
            id: ProductId("prod_espresso".to_string()),
            name: "Espresso Machine".to_string(),
            description: "Dual boiler, PID temperature control".to_string(),
            price: Price::from_dollars(250),
            image_url: "https://example.com/img/espresso.jpg".to_string(),
        });
        catalog
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        Ok(catalog)
    }

    /// Add or replace a product.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products, ordered by ID.
    pub fn all(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
