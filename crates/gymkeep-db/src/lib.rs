//! Gymkeep DB - redb implementation of the collection trait.

pub mod collection;
pub mod tables;

pub use collection::RedbCollection;

use std::path::Path;
use std::sync::Arc;

use redb::Database;

use gymkeep_core::{GymClass, Member, StorageError, Trainer};

use crate::tables::{ALL_TABLES, GYM_CLASSES_TABLE, MEMBERS_TABLE, TRAINERS_TABLE};

/// The three collections, all backed by one database file.
pub struct RedbCollections {
    pub members: RedbCollection<Member>,
    pub classes: RedbCollection<GymClass>,
    pub trainers: RedbCollection<Trainer>,
}

/// Initialize a database with all required tables.
pub fn init_database(path: impl AsRef<Path>) -> Result<Arc<Database>, StorageError> {
    let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;

    for table in ALL_TABLES {
        // Record type does not matter for table creation.
        RedbCollection::<Member>::init_table(&db, table)?;
    }

    Ok(Arc::new(db))
}

/// Build the member, class and trainer collections over `db`.
pub fn open_collections(db: Arc<Database>) -> RedbCollections {
    RedbCollections {
        members: RedbCollection::new(db.clone(), MEMBERS_TABLE),
        classes: RedbCollection::new(db.clone(), GYM_CLASSES_TABLE),
        trainers: RedbCollection::new(db, TRAINERS_TABLE),
    }
}
