use crate::actor_framework::RecordStatus;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category_id: String,
    pub description: String,
    pub stock: u32,
    pub status: RecordStatus,
}

/// Payload for creating a new product.
///
/// `stock` is signed so that a negative value coming from a caller is
/// reported as a validation failure rather than being unrepresentable.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: String,
    pub description: String,
    pub stock: i64,
}

/// Payload for updating an existing product. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i64>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True when the product is active and has at least `quantity` units.
    pub fn is_available(&self, quantity: u64) -> bool {
        self.is_active() && u64::from(self.stock) >= quantity
    }
}
