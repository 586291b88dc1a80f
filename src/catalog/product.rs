use crate::actor_framework::{Entity, RecordStatus};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::error::CatalogError;

use super::{validate_name, validate_price, validate_stock};

impl Entity for Product {
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;

    const ID_PREFIX: &'static str = "prod";

    fn id(&self) -> &str {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// The category reference is not checked here; [`super::Catalog::add_product`]
    /// does that against the live category store.
    fn from_create(id: String, payload: ProductCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            name: validate_name("product name", &payload.name)?,
            price: validate_price(payload.price)?,
            category_id: payload.category_id,
            description: payload.description,
            stock: validate_stock(payload.stock)?,
            status: RecordStatus::Active,
        })
    }

    /// Updates name, price, description and/or stock.
    ///
    /// # Errors
    /// Returns a validation error, leaving every field untouched, if any
    /// provided value is invalid.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), CatalogError> {
        let name = patch.name.as_deref().map(|n| validate_name("product name", n)).transpose()?;
        let price = patch.price.map(validate_price).transpose()?;
        let stock = patch.stock.map(validate_stock).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn on_deactivate(&mut self) {
        self.status = RecordStatus::Deactivated;
    }
}

impl Product {
    /// Decrements stock by `quantity`.
    ///
    /// # Errors
    /// Fails without modifying stock if fewer than `quantity` units remain.
    pub(crate) fn debit_stock(&mut self, quantity: u32) -> Result<(), CatalogError> {
        match self.stock.checked_sub(quantity) {
            Some(remaining) => {
                self.stock = remaining;
                Ok(())
            }
            None => Err(CatalogError::InsufficientStock {
                product_id: self.id.clone(),
                requested: quantity,
                available: self.stock,
            }),
        }
    }
}
