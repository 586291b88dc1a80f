//! The application state and its use-cases.
//!
//! [`Marketplace`] owns the catalog, every cart, the payment ledger and the
//! session table. It is built once at startup and handed to the
//! [`crate::actors::MarketActor`], which is then its only owner. Every
//! operation that takes a [`SessionToken`] resolves it before reading or
//! changing anything else.

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::cart::{Cart, CartSummary};
use crate::catalog::{Catalog, CategorySummary, ProductListing};
use crate::checkout;
use crate::domain::{
    Account, CategoryCreate, Credentials, PaymentMethod, Product, ProductCreate, ProductPatch,
    Role, Transaction, TransactionId,
};
use crate::error::{CartError, MarketError};
use crate::payment::Ledger;
use crate::session::{SessionStore, SessionToken};

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub transaction_id: TransactionId,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Marketplace {
    catalog: Catalog,
    carts: HashMap<String, Cart>,
    ledger: Ledger,
    sessions: SessionStore,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn cart(&self, user_id: &str) -> Option<&Cart> {
        self.carts.get(user_id)
    }

    pub fn register_account(&mut self, account: Account) -> Result<(), MarketError> {
        Ok(self.sessions.register(account)?)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub fn login_customer(&mut self, credentials: &Credentials) -> Result<SessionToken, MarketError> {
        Ok(self.sessions.login(credentials, Role::Customer)?)
    }

    pub fn login_admin(&mut self, credentials: &Credentials) -> Result<SessionToken, MarketError> {
        Ok(self.sessions.login(credentials, Role::Admin)?)
    }

    pub fn logout(&mut self, token: &SessionToken) {
        self.sessions.logout(token);
    }

    // =========================================================================
    // Customer operations
    // =========================================================================

    pub fn browse_catalog(&self, token: &SessionToken) -> Result<Vec<ProductListing>, MarketError> {
        self.sessions.resolve_customer(token)?;
        Ok(self
            .catalog
            .list_active_products()
            .into_iter()
            .map(|p| self.catalog.listing(p))
            .collect())
    }

    /// Active product lookup for a signed-in customer.
    pub fn product_details(&self, token: &SessionToken, product_id: &str) -> Result<ProductListing, MarketError> {
        self.sessions.resolve_customer(token)?;
        let product = self
            .catalog
            .get_product(product_id)
            .filter(|p| p.is_active())
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;
        Ok(self.catalog.listing(product))
    }

    #[instrument(skip(self, token))]
    pub fn add_to_cart(&mut self, token: &SessionToken, product_id: &str, quantity: i64) -> Result<CartSummary, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        let product = self
            .catalog
            .get_product(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;

        let cart = self
            .carts
            .entry(user_id.clone())
            .or_insert_with(|| Cart::new(user_id.clone()));
        cart.add_item(product, quantity)?;
        info!(%user_id, product_name = %product.name, quantity, "Added to cart");
        Ok(cart.summary(&self.catalog))
    }

    #[instrument(skip(self, token))]
    pub fn remove_from_cart(&mut self, token: &SessionToken, product_id: &str) -> Result<CartSummary, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        let cart = self
            .carts
            .get_mut(&user_id)
            .ok_or_else(|| CartError::ItemNotFound(product_id.to_string()))?;
        cart.remove_item(product_id)?;
        info!(%user_id, "Removed from cart");
        Ok(cart.summary(&self.catalog))
    }

    #[instrument(skip(self, token))]
    pub fn update_cart_quantity(
        &mut self,
        token: &SessionToken,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartSummary, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        let cart = self
            .carts
            .get_mut(&user_id)
            .ok_or_else(|| CartError::ItemNotFound(product_id.to_string()))?;
        cart.update_quantity(&self.catalog, product_id, quantity)?;
        info!(%user_id, "Cart quantity updated");
        Ok(cart.summary(&self.catalog))
    }

    pub fn view_cart(&self, token: &SessionToken) -> Result<CartSummary, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        Ok(self
            .carts
            .get(&user_id)
            .map_or_else(CartSummary::empty, |c| c.summary(&self.catalog)))
    }

    pub fn clear_cart(&mut self, token: &SessionToken) -> Result<(), MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        if let Some(cart) = self.carts.get_mut(&user_id) {
            cart.clear();
        }
        Ok(())
    }

    #[instrument(skip(self, token))]
    pub fn checkout(&mut self, token: &SessionToken, payment_method: &str) -> Result<Receipt, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        let transaction_id = checkout::checkout(
            &mut self.catalog,
            &mut self.ledger,
            self.carts.get_mut(&user_id),
            &user_id,
            payment_method,
        )?;

        let transaction = self
            .ledger
            .get_transaction(&transaction_id)
            .ok_or_else(|| MarketError::TransactionNotFound(transaction_id.to_string()))?;
        let receipt = Receipt {
            transaction_id,
            amount: transaction.amount,
            payment_method: transaction.payment_method,
            message: transaction.payment_method.redirect_message(transaction.amount),
        };
        info!(%user_id, transaction_id = %transaction_id, "Your order is successfully placed");
        Ok(receipt)
    }

    /// Looks up one of the caller's own transactions.
    pub fn get_transaction(&self, token: &SessionToken, transaction_id: TransactionId) -> Result<Transaction, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        self.ledger
            .get_transaction(&transaction_id)
            .filter(|t| t.user_id == user_id)
            .cloned()
            .ok_or_else(|| MarketError::TransactionNotFound(transaction_id.to_string()))
    }

    pub fn order_history(&self, token: &SessionToken) -> Result<Vec<Transaction>, MarketError> {
        let user_id = self.sessions.resolve_customer(token)?;
        Ok(self.ledger.transactions_for(&user_id).into_iter().cloned().collect())
    }

    // =========================================================================
    // Admin operations
    // =========================================================================

    #[instrument(skip(self, token))]
    pub fn add_product(&mut self, token: &SessionToken, payload: ProductCreate) -> Result<String, MarketError> {
        self.sessions.resolve_admin(token)?;
        Ok(self.catalog.add_product(payload)?)
    }

    #[instrument(skip(self, token))]
    pub fn update_product(
        &mut self,
        token: &SessionToken,
        product_id: &str,
        patch: ProductPatch,
    ) -> Result<Product, MarketError> {
        self.sessions.resolve_admin(token)?;
        Ok(self.catalog.update_product(product_id, patch)?.clone())
    }

    #[instrument(skip(self, token))]
    pub fn delete_product(&mut self, token: &SessionToken, product_id: &str) -> Result<(), MarketError> {
        self.sessions.resolve_admin(token)?;
        self.catalog.deactivate_product(product_id)?;
        Ok(())
    }

    #[instrument(skip(self, token))]
    pub fn add_category(&mut self, token: &SessionToken, payload: CategoryCreate) -> Result<String, MarketError> {
        self.sessions.resolve_admin(token)?;
        Ok(self.catalog.add_category(payload)?)
    }

    #[instrument(skip(self, token))]
    pub fn delete_category(&mut self, token: &SessionToken, category_id: &str) -> Result<(), MarketError> {
        self.sessions.resolve_admin(token)?;
        self.catalog.deactivate_category(category_id)?;
        Ok(())
    }

    /// Every product, including deactivated ones.
    pub fn list_products(&self, token: &SessionToken) -> Result<Vec<ProductListing>, MarketError> {
        self.sessions.resolve_admin(token)?;
        Ok(self
            .catalog
            .list_products()
            .into_iter()
            .map(|p| self.catalog.listing(p))
            .collect())
    }

    pub fn list_categories(&self, token: &SessionToken) -> Result<Vec<CategorySummary>, MarketError> {
        self.sessions.resolve_admin(token)?;
        Ok(self.catalog.category_summaries())
    }
}
