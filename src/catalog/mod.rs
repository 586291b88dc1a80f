//! Product and category records, kept by value in indexed stores.
//!
//! Products and categories are never removed; deleting one only deactivates
//! it. Carts refer to products by ID and resolve them here on every read.

mod category;
mod product;

use tracing::{info, warn};

use crate::actor_framework::EntityStore;
use crate::domain::{Category, CategoryCreate, Product, ProductCreate, ProductPatch};
use crate::error::CatalogError;

/// A product together with the name of its category, as shown when browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub product: Product,
    pub category_name: String,
}

/// A category with the number of active products referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub active_products: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: EntityStore<Product>,
    categories: EntityStore<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.get_product(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    pub fn list_active_products(&self) -> Vec<&Product> {
        self.products.iter_active().collect()
    }

    /// Every product, active or not.
    pub fn list_products(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    pub fn list_active_categories(&self) -> Vec<&Category> {
        self.categories.iter_active().collect()
    }

    pub fn list_categories(&self) -> Vec<&Category> {
        self.categories.iter().collect()
    }

    /// Pairs a product with its category name; `"Unknown"` when the category
    /// reference does not resolve.
    pub fn listing(&self, product: &Product) -> ProductListing {
        let category_name = self
            .get_category(&product.category_id)
            .map_or_else(|| "Unknown".to_string(), |c| c.name.clone());
        ProductListing {
            product: product.clone(),
            category_name,
        }
    }

    pub fn active_products_in(&self, category_id: &str) -> usize {
        self.products
            .iter_active()
            .filter(|p| p.category_id == category_id)
            .count()
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|category| CategorySummary {
                category: category.clone(),
                active_products: self.active_products_in(&category.id),
            })
            .collect()
    }

    /// Adds a product under an existing, active category.
    pub fn add_product(&mut self, payload: ProductCreate) -> Result<String, CatalogError> {
        match self.get_category(&payload.category_id) {
            None => return Err(CatalogError::CategoryNotFound(payload.category_id)),
            Some(c) if !c.is_active() => return Err(CatalogError::CategoryInactive(c.id.clone())),
            Some(_) => {}
        }
        let id = self.products.create(payload)?;
        info!(product_id = %id, "Product added");
        Ok(id)
    }

    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Result<&Product, CatalogError> {
        let product = self
            .products
            .update(id, patch)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))??;
        info!(product_id = %id, product_name = %product.name, "Product updated");
        Ok(product)
    }

    /// Soft-deletes a product. Deactivating an already inactive product is a no-op.
    pub fn deactivate_product(&mut self, id: &str) -> Result<&Product, CatalogError> {
        let product = self
            .products
            .deactivate(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
        info!(product_id = %id, product_name = %product.name, "Product deactivated");
        Ok(product)
    }

    pub fn add_category(&mut self, payload: CategoryCreate) -> Result<String, CatalogError> {
        let id = self.categories.create(payload)?;
        info!(category_id = %id, "Category added");
        Ok(id)
    }

    /// Soft-deletes a category.
    ///
    /// # Errors
    /// Refused with [`CatalogError::CategoryInUse`] while any active product
    /// references the category.
    pub fn deactivate_category(&mut self, id: &str) -> Result<&Category, CatalogError> {
        if self.get_category(id).is_none() {
            return Err(CatalogError::CategoryNotFound(id.to_string()));
        }
        let active_products = self.active_products_in(id);
        if active_products > 0 {
            warn!(category_id = %id, active_products, "Category still in use");
            return Err(CatalogError::CategoryInUse {
                category_id: id.to_string(),
                active_products,
            });
        }
        let category = self
            .categories
            .deactivate(id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))?;
        info!(category_id = %id, category_name = %category.name, "Category deactivated");
        Ok(category)
    }

    pub(crate) fn debit_stock(&mut self, id: &str, quantity: u32) -> Result<(), CatalogError> {
        self.products
            .get_mut(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?
            .debit_stock(quantity)
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<f64, CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::validation("price", format!("must be a non-negative amount, got {price}")));
    }
    Ok(price)
}

fn validate_stock(stock: i64) -> Result<u32, CatalogError> {
    u32::try_from(stock)
        .map_err(|_| CatalogError::validation("stock", format!("must be between 0 and {}, got {stock}", u32::MAX)))
}
