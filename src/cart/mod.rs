//! Per-user shopping carts.
//!
//! A cart holds product IDs and quantities only. Prices, names, stock and
//! status are read from the [`Catalog`] at the moment they are needed, so an
//! admin edit is immediately visible through every cart. No stock is held
//! while an item sits in a cart.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::Product;
use crate::error::CartError;

/// A (product, quantity) pair. `quantity` is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}

/// A cart line resolved against the catalog, as shown to the buyer.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Snapshot of a cart returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_amount: f64,
    pub item_count: u64,
}

impl CartSummary {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total_amount: 0.0,
            item_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Cart {
    user_id: String,
    items: Vec<CartItem>,
    created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// # Errors
    /// - [`CartError::InvalidQuantity`] if `quantity <= 0`
    /// - [`CartError::ProductUnavailable`] if the product is deactivated
    /// - [`CartError::InsufficientStock`] if current stock is below the
    ///   merged quantity
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        let requested = positive_quantity(quantity)?;
        let existing = self.item(&product.id).map_or(0, |i| i.quantity);
        let merged = u64::from(existing) + requested;

        check_available(product, merged)?;
        // Stock fits in u32, so a merged quantity that passed the check does too.
        let merged = u32::try_from(merged).map_err(|_| CartError::InvalidQuantity(quantity))?;

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity = merged,
            None => self.items.push(CartItem {
                product_id: product.id.clone(),
                quantity: merged,
            }),
        }
        debug!(user_id = %self.user_id, product_id = %product.id, quantity = merged, "Cart line set");
        Ok(())
    }

    /// # Errors
    /// [`CartError::ItemNotFound`] if the cart has no line for `product_id`.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| CartError::ItemNotFound(product_id.to_string()))?;
        self.items.remove(position);
        debug!(user_id = %self.user_id, product_id, "Cart line removed");
        Ok(())
    }

    /// Sets the absolute quantity of an existing line; `new_quantity <= 0`
    /// removes the line.
    ///
    /// # Errors
    /// - [`CartError::ItemNotFound`] if the cart has no line for `product_id`
    /// - [`CartError::ProductNotFound`] if the product vanished from the catalog
    /// - [`CartError::ProductUnavailable`] / [`CartError::InsufficientStock`]
    ///   if the new quantity cannot be met
    pub fn update_quantity(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        new_quantity: i64,
    ) -> Result<(), CartError> {
        if self.item(product_id).is_none() {
            return Err(CartError::ItemNotFound(product_id.to_string()));
        }
        if new_quantity <= 0 {
            return self.remove_item(product_id);
        }

        let product = catalog
            .get_product(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;
        let requested = positive_quantity(new_quantity)?;
        check_available(product, requested)?;
        // Stock fits in u32, so a quantity that passed the check does too.
        let quantity = u32::try_from(requested).map_err(|_| CartError::InvalidQuantity(new_quantity))?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
        debug!(user_id = %self.user_id, product_id, quantity, "Cart line set");
        Ok(())
    }

    /// Sum of live `price * quantity` over all lines.
    pub fn total_amount(&self, catalog: &Catalog) -> f64 {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .get_product(&item.product_id)
                    .map(|p| p.price * f64::from(item.quantity))
            })
            .sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Resolves every line against the catalog.
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.items
            .iter()
            .filter_map(|item| {
                let product = catalog.get_product(&item.product_id)?;
                Some(CartLine {
                    product_id: item.product_id.clone(),
                    name: product.name.clone(),
                    unit_price: product.price,
                    quantity: item.quantity,
                    line_total: product.price * f64::from(item.quantity),
                })
            })
            .collect()
    }

    pub fn summary(&self, catalog: &Catalog) -> CartSummary {
        CartSummary {
            lines: self.lines(catalog),
            total_amount: self.total_amount(catalog),
            item_count: self.item_count(),
        }
    }
}

fn positive_quantity(quantity: i64) -> Result<u64, CartError> {
    u64::try_from(quantity)
        .ok()
        .filter(|&q| q > 0)
        .ok_or(CartError::InvalidQuantity(quantity))
}

fn check_available(product: &Product, quantity: u64) -> Result<(), CartError> {
    if !product.is_active() {
        return Err(CartError::ProductUnavailable {
            product_id: product.id.clone(),
            name: product.name.clone(),
        });
    }
    if !product.is_available(quantity) {
        return Err(CartError::InsufficientStock {
            product_id: product.id.clone(),
            name: product.name.clone(),
            requested: quantity,
            available: product.stock,
        });
    }
    Ok(())
}
