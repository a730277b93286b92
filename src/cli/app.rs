//! Storefront application integrating all components

use crate::cart::{Cart, CartItem};
use crate::catalog::Catalog;
use crate::error::{BargainError, Result};
use crate::login::{LoginFlow, PhoneNumber};
use crate::negotiation::{Decision, NegotiationEngine, NegotiationPolicy, NegotiationSession};
use crate::types::{Price, Product, ProductId};
use std::sync::{Arc, Mutex};

/// Main storefront application
///
/// Wires the catalog, the buyer's cart, the login gate, and the negotiation
/// engine together: accepted negotiations land in the cart through the
/// engine's commit hook.
#[derive(Clone)]
pub struct StorefrontApp {
    catalog: Catalog,
    cart: Arc<Mutex<Cart>>,
    login: Arc<Mutex<LoginFlow>>,
    engine: NegotiationEngine,
}

impl StorefrontApp {
    /// Create an app over the demo catalog with the default policy.
    pub fn new() -> Self {
        Self::with_catalog_and_policy(Catalog::with_demo_products(), NegotiationPolicy::default())
    }

    /// Create an app over a specific catalog and policy.
    pub fn with_catalog_and_policy(catalog: Catalog, policy: NegotiationPolicy) -> Self {
        let cart = Arc::new(Mutex::new(Cart::new()));

        let commit_cart = cart.clone();
        let engine = NegotiationEngine::new(
            policy,
            Arc::new(move |product: &Product, price: Price| {
                let mut cart = match commit_cart.lock() {
                    Ok(cart) => cart,
                    Err(poisoned) => poisoned.into_inner(),
                };
                cart.add(product.clone(), price);
            }),
        );

        Self {
            catalog,
            cart,
            login: Arc::new(Mutex::new(LoginFlow::new())),
            engine,
        }
    }

    /// All catalog products
    pub fn browse(&self) -> Vec<Product> {
        self.catalog.all()
    }

    /// Look up a product by its raw ID string.
    pub fn product(&self, raw_id: &str) -> Result<Product> {
        self.catalog
            .get(&ProductId(raw_id.to_string()))
            .cloned()
            .ok_or_else(|| BargainError::ProductNotFound(raw_id.to_string()))
    }

    /// Open the negotiation dialog for a product.
    pub async fn begin_negotiation(&self, raw_id: &str) -> Result<NegotiationSession> {
        let product = self.product(raw_id)?;
        Ok(self.engine.open(product).await)
    }

    /// Submit a buyer-typed offer against the open negotiation.
    pub async fn submit_offer(&self, raw: &str) -> Result<Decision> {
        self.engine.submit_offer(raw).await
    }

    /// Accept the counter-offer on the table.
    pub async fn accept_counter(&self) -> Result<Decision> {
        self.engine.accept_counter().await
    }

    /// Close the negotiation dialog.
    pub async fn close_negotiation(&self) {
        self.engine.close().await
    }

    /// Current negotiation session rendered as pretty JSON, if one is open.
    pub async fn session_json(&self) -> Result<Option<String>> {
        match self.engine.session().await {
            Some(session) => Ok(Some(serde_json::to_string_pretty(&session)?)),
            None => Ok(None),
        }
    }

    /// Run both login steps in one go.
    pub fn login(&self, mobile: &str, otp: &str) -> Result<PhoneNumber> {
        let mut flow = self.lock_login();
        flow.reset();
        flow.submit_phone(mobile)?;
        flow.submit_code(otp)
    }

    /// Check if a buyer is logged in
    pub fn is_logged_in(&self) -> bool {
        self.lock_login().is_logged_in()
    }

    /// Header badge count
    pub fn cart_count(&self) -> usize {
        self.lock_cart().count()
    }

    /// Sum of prices paid across the cart
    pub fn cart_total(&self) -> Price {
        self.lock_cart().total()
    }

    /// Snapshot of the cart contents
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.lock_cart().items().to_vec()
    }

    fn lock_cart(&self) -> std::sync::MutexGuard<'_, Cart> {
        match self.cart.lock() {
            Ok(cart) => cart,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_login(&self) -> std::sync::MutexGuard<'_, LoginFlow> {
        match self.login.lock() {
            Ok(flow) => flow,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for StorefrontApp {
    fn default() -> Self {
        Self::new()
    }
}
