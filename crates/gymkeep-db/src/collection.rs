use std::marker::PhantomData;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};

use gymkeep_core::{Collection, Record, StorageError};

type RecordTable = TableDefinition<'static, &'static str, &'static [u8]>;

fn db_err(e: impl ToString) -> StorageError {
    StorageError::Database(e.to_string())
}

fn decode<T: Record>(bytes: &[u8]) -> Result<T, StorageError> {
    serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// redb implementation of Collection.
///
/// Each write runs in its own committed write transaction, so it is durable
/// and visible to the next read as soon as the call returns.
pub struct RedbCollection<T> {
    db: Arc<Database>,
    table: RecordTable,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RedbCollection<T> {
    pub fn new(db: Arc<Database>, table: RecordTable) -> Self {
        Self {
            db,
            table,
            _record: PhantomData,
        }
    }

    /// Initialize a table.
    pub fn init_table(db: &Database, table: RecordTable) -> Result<(), StorageError> {
        let write_txn = db.begin_write().map_err(db_err)?;
        {
            let _ = write_txn.open_table(table).map_err(db_err)?;
        }
        write_txn.commit().map_err(db_err)?;
        Ok(())
    }
}

impl<T: Record> Collection<T> for RedbCollection<T> {
    fn insert(&self, id: &str, record: &T) -> Result<(), StorageError> {
        let value =
            serde_json::to_vec(record).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let write_txn = self.db.begin_write().map_err(db_err)?;
        {
            let mut table = write_txn.open_table(self.table).map_err(db_err)?;
            table.insert(id, value.as_slice()).map_err(db_err)?;
        }
        write_txn.commit().map_err(db_err)?;

        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<T>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(self.table).map_err(db_err)?;

        let value = table.get(id).map_err(db_err)?;
        value.map(|v| decode(v.value())).transpose()
    }

    fn values(&self) -> Result<Vec<T>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(self.table).map_err(db_err)?;

        let mut records = Vec::new();
        for entry in table.iter().map_err(db_err)? {
            let (_, value) = entry.map_err(db_err)?;
            records.push(decode(value.value())?);
        }

        Ok(records)
    }

    fn remove(&self, id: &str) -> Result<Option<T>, StorageError> {
        let write_txn = self.db.begin_write().map_err(db_err)?;

        let removed;
        {
            let mut table = write_txn.open_table(self.table).map_err(db_err)?;
            let old = table.remove(id).map_err(db_err)?;
            removed = match old {
                Some(value) => Some(decode::<T>(value.value())?),
                None => None,
            };
        }

        write_txn.commit().map_err(db_err)?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{MEMBERS_TABLE, TRAINERS_TABLE};
    use gymkeep_core::{Member, Trainer};
    use tempfile::{tempdir, TempDir};

    fn create_test_db() -> (TempDir, Arc<Database>) {
        let dir = tempdir().unwrap();
        let db = Database::create(dir.path().join("test.redb")).unwrap();
        RedbCollection::<Member>::init_table(&db, MEMBERS_TABLE).unwrap();
        RedbCollection::<Trainer>::init_table(&db, TRAINERS_TABLE).unwrap();
        (dir, Arc::new(db))
    }

    fn make_member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@gym.com", name.to_lowercase()),
            join_date: "2024-01-01".to_string(),
            membership_type: "gold".to_string(),
            created_at: 1000,
            updated_at: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let (_dir, db) = create_test_db();
        let store = RedbCollection::<Member>::new(db, MEMBERS_TABLE);

        let member = make_member("m-1", "Jo");
        store.insert(&member.id, &member).unwrap();

        let retrieved = store.get("m-1").unwrap().unwrap();
        assert_eq!(retrieved, member);
        assert!(store.get("m-2").unwrap().is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let (_dir, db) = create_test_db();
        let store = RedbCollection::<Member>::new(db, MEMBERS_TABLE);

        store.insert("m-1", &make_member("m-1", "Jo")).unwrap();
        let mut updated = make_member("m-1", "Joanna");
        updated.updated_at = Some(2000);
        store.insert("m-1", &updated).unwrap();

        assert_eq!(store.values().unwrap(), vec![updated]);
    }

    #[test]
    fn test_values() {
        let (_dir, db) = create_test_db();
        let store = RedbCollection::<Member>::new(db, MEMBERS_TABLE);

        store.insert("m-1", &make_member("m-1", "Ann")).unwrap();
        store.insert("m-2", &make_member("m-2", "Ben")).unwrap();
        store.insert("m-3", &make_member("m-3", "Cat")).unwrap();

        let all = store.values().unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_remove() {
        let (_dir, db) = create_test_db();
        let store = RedbCollection::<Member>::new(db, MEMBERS_TABLE);

        let member = make_member("m-1", "Jo");
        store.insert("m-1", &member).unwrap();

        assert_eq!(store.remove("m-1").unwrap(), Some(member));
        assert!(store.get("m-1").unwrap().is_none());

        // Removing a missing record leaves the table alone
        store.insert("m-2", &make_member("m-2", "Bo")).unwrap();
        assert!(store.remove("m-1").unwrap().is_none());
        assert_eq!(store.values().unwrap().len(), 1);
    }

    #[test]
    fn test_tables_are_independent() {
        let (_dir, db) = create_test_db();
        let members = RedbCollection::<Member>::new(db.clone(), MEMBERS_TABLE);
        let trainers = RedbCollection::<Trainer>::new(db, TRAINERS_TABLE);

        members.insert("same-id", &make_member("same-id", "Jo")).unwrap();

        assert!(trainers.get("same-id").unwrap().is_none());
        assert!(trainers.values().unwrap().is_empty());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("durable.redb");

        {
            let db = Database::create(&path).unwrap();
            RedbCollection::<Member>::init_table(&db, MEMBERS_TABLE).unwrap();
            let store = RedbCollection::<Member>::new(Arc::new(db), MEMBERS_TABLE);
            store.insert("m-1", &make_member("m-1", "Jo")).unwrap();
        }

        let db = Database::create(&path).unwrap();
        let store = RedbCollection::<Member>::new(Arc::new(db), MEMBERS_TABLE);
        assert_eq!(store.get("m-1").unwrap(), Some(make_member("m-1", "Jo")));
    }
}
