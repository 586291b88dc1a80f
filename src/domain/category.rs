use crate::actor_framework::RecordStatus;

/// Represents a product category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: RecordStatus,
}

/// Payload for creating a new category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
