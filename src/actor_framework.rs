use std::collections::HashMap;
use std::fmt::Debug;
use tokio::sync::oneshot;

use crate::error::CatalogError;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Lifecycle state shared by every soft-deletable record.
///
/// `Active -> Deactivated` is the only transition; `Deactivated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordStatus {
    #[default]
    Active,
    Deactivated,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Trait that any catalog record must implement to be kept in an [`EntityStore`].
pub trait Entity: Clone + Debug + Send + 'static {
    type CreatePayload: Debug;
    type Patch: Debug;

    /// Prefix of generated identifiers, e.g. `prod` for `prod1`, `prod2`, ...
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// Construct the full entity from the generated ID and payload.
    fn from_create(id: String, payload: Self::CreatePayload) -> Result<Self, CatalogError>;

    // --- Lifecycle Hooks ---

    /// Apply a patch. Implementations must validate the whole patch before
    /// touching any field.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), CatalogError>;

    fn status(&self) -> RecordStatus;

    fn on_deactivate(&mut self);

    fn is_active(&self) -> bool {
        self.status().is_active()
    }
}

// =============================================================================
// 2. THE GENERIC RESPONSE CHANNEL
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// Keyed, insertion-ordered store of entities. Records are never removed,
/// only deactivated.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: HashMap<String, T>,
    order: Vec<String>,
    next_seq: u64,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            next_seq: 1,
        }
    }

    /// Validates the payload and stores the new record. The sequence number
    /// is only consumed when creation succeeds.
    pub fn create(&mut self, payload: T::CreatePayload) -> Result<String, CatalogError> {
        let id = format!("{}{}", T::ID_PREFIX, self.next_seq);
        let item = T::from_create(id.clone(), payload)?;
        self.next_seq += 1;
        self.order.push(id.clone());
        self.records.insert(id.clone(), item);
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    pub fn update(&mut self, id: &str, patch: T::Patch) -> Option<Result<&T, CatalogError>> {
        let item = self.records.get_mut(id)?;
        if let Err(e) = item.on_update(patch) {
            return Some(Err(e));
        }
        Some(Ok(&*item))
    }

    /// Deactivates the record. Returns `None` when the ID is unknown.
    pub fn deactivate(&mut self, id: &str) -> Option<&T> {
        let item = self.records.get_mut(id)?;
        item.on_deactivate();
        Some(&*item)
    }

    /// All records in insertion order, regardless of status.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter(|item| item.is_active())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: String,
        label: String,
        status: RecordStatus,
    }

    #[derive(Debug)]
    struct TagPatch {
        label: Option<String>,
    }

    impl Entity for Tag {
        type CreatePayload = String;
        type Patch = TagPatch;

        const ID_PREFIX: &'static str = "tag";

        fn id(&self) -> &str {
            &self.id
        }

        fn from_create(id: String, label: String) -> Result<Self, CatalogError> {
            if label.trim().is_empty() {
                return Err(CatalogError::validation("label", "cannot be empty"));
            }
            Ok(Self { id, label, status: RecordStatus::Active })
        }

        fn on_update(&mut self, patch: TagPatch) -> Result<(), CatalogError> {
            if let Some(label) = patch.label {
                if label.trim().is_empty() {
                    return Err(CatalogError::validation("label", "cannot be empty"));
                }
                self.label = label;
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

    // --- Test ---

    #[test]
    fn test_store_lifecycle() {
        let mut store = EntityStore::<Tag>::new();

        // 1. Create
        let first = store.create("rust".to_string()).unwrap();
        let second = store.create("tokio".to_string()).unwrap();
        assert_eq!(first, "tag1");
        assert_eq!(second, "tag2");

        // 2. Update
        let updated = store
            .update(&first, TagPatch { label: Some("rustlang".into()) })
            .unwrap()
            .unwrap();
        assert_eq!(updated.label, "rustlang");

        // 3. Deactivate keeps the record but hides it from active listings
        store.deactivate(&second).unwrap();
        assert_eq!(store.len(), 2);
        let active: Vec<_> = store.iter_active().map(|t| t.id.clone()).collect();
        assert_eq!(active, vec!["tag1".to_string()]);
        assert_eq!(store.get(&second).unwrap().status, RecordStatus::Deactivated);
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut store = EntityStore::<Tag>::new();
        assert!(store.create("   ".to_string()).is_err());
        assert_eq!(store.create("ok".to_string()).unwrap(), "tag1");
    }

    #[test]
    fn test_unknown_ids() {
        let mut store = EntityStore::<Tag>::new();
        assert!(store.get("tag9").is_none());
        assert!(store.update("tag9", TagPatch { label: None }).is_none());
        assert!(store.deactivate("tag9").is_none());
        assert!(store.is_empty());
    }
}
