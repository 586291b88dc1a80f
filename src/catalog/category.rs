use crate::actor_framework::{Entity, RecordStatus};
use crate::domain::{Category, CategoryCreate};
use crate::error::CatalogError;

use super::validate_name;

impl Entity for Category {
    type CreatePayload = CategoryCreate;
    // Categories are immutable apart from deactivation.
    type Patch = ();

    const ID_PREFIX: &'static str = "cat";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: CategoryCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            name: validate_name("category name", &payload.name)?,
            description: payload.description,
            status: RecordStatus::Active,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), CatalogError> {
        Ok(())
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn on_deactivate(&mut self) {
        self.status = RecordStatus::Deactivated;
    }
}
