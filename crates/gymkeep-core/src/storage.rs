use crate::error::StorageError;
use crate::record::Record;

/// A durable mapping from identifier to record for one entity kind.
///
/// Writes must be visible to the next read as soon as the call returns.
pub trait Collection<T: Record>: Send + Sync {
    /// Store `record` at `id`, overwriting any previous record.
    fn insert(&self, id: &str, record: &T) -> Result<(), StorageError>;

    /// Get a record by ID.
    fn get(&self, id: &str) -> Result<Option<T>, StorageError>;

    /// All current records. Order is stable within a call only.
    fn values(&self) -> Result<Vec<T>, StorageError>;

    /// Remove a record, returning it if it was present.
    fn remove(&self, id: &str) -> Result<Option<T>, StorageError>;
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    /// In-memory collection for testing.
    pub struct InMemoryCollection<T> {
        records: RwLock<BTreeMap<String, T>>,
    }

    impl<T> Default for InMemoryCollection<T> {
        fn default() -> Self {
            Self {
                records: RwLock::new(BTreeMap::new()),
            }
        }
    }

    impl<T> InMemoryCollection<T> {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl<T: Record> Collection<T> for InMemoryCollection<T> {
        fn insert(&self, id: &str, record: &T) -> Result<(), StorageError> {
            self.records
                .write()
                .unwrap()
                .insert(id.to_string(), record.clone());
            Ok(())
        }

        fn get(&self, id: &str) -> Result<Option<T>, StorageError> {
            Ok(self.records.read().unwrap().get(id).cloned())
        }

        fn values(&self) -> Result<Vec<T>, StorageError> {
            Ok(self.records.read().unwrap().values().cloned().collect())
        }

        fn remove(&self, id: &str) -> Result<Option<T>, StorageError> {
            Ok(self.records.write().unwrap().remove(id))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::trainer::Trainer;

        fn trainer(id: &str) -> Trainer {
            Trainer {
                id: id.to_string(),
                name: "Sam".to_string(),
                email: "sam@gym.com".to_string(),
                specializations: vec!["yoga".to_string()],
                created_at: 1,
                updated_at: None,
            }
        }

        #[test]
        fn test_insert_overwrites() {
            let store = InMemoryCollection::new();
            store.insert("t-1", &trainer("t-1")).unwrap();

            let mut renamed = trainer("t-1");
            renamed.name = "Sasha".to_string();
            store.insert("t-1", &renamed).unwrap();

            assert_eq!(store.values().unwrap().len(), 1);
            assert_eq!(store.get("t-1").unwrap().unwrap().name, "Sasha");
        }

        #[test]
        fn test_remove_returns_record() {
            let store = InMemoryCollection::new();
            store.insert("t-1", &trainer("t-1")).unwrap();

            assert_eq!(store.remove("t-1").unwrap(), Some(trainer("t-1")));
            assert!(store.get("t-1").unwrap().is_none());
            assert!(store.remove("t-1").unwrap().is_none());
        }
    }
}
