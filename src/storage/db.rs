use chrono::{DateTime, Utc};
use redb::{
    Database as RedbDatabase, ReadTransaction, ReadableTable, ReadableTableMetadata,
    WriteTransaction,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::models::{Listing, Page, PurgeStats};
use super::tables::*;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Commit error: {0}")]
    Commit(Box<redb::CommitError>),
    #[error("Database error: {0}")]
    Redb(Box<redb::Error>),
    #[error("Database error: {0}")]
    RedbDatabase(Box<redb::DatabaseError>),
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),
    #[error("Storage error: {0}")]
    Storage(Box<redb::StorageError>),
    #[error("Table error: {0}")]
    Table(Box<redb::TableError>),
    #[error("Transaction error: {0}")]
    Transaction(Box<redb::TransactionError>),
}

impl From<redb::CommitError> for DatabaseError {
    fn from(e: redb::CommitError) -> Self {
        DatabaseError::Commit(Box::new(e))
    }
}

impl From<redb::DatabaseError> for DatabaseError {
    fn from(e: redb::DatabaseError) -> Self {
        DatabaseError::RedbDatabase(Box::new(e))
    }
}

impl From<redb::Error> for DatabaseError {
    fn from(e: redb::Error) -> Self {
        DatabaseError::Redb(Box::new(e))
    }
}

impl From<redb::StorageError> for DatabaseError {
    fn from(e: redb::StorageError) -> Self {
        DatabaseError::Storage(Box::new(e))
    }
}

impl From<redb::TableError> for DatabaseError {
    fn from(e: redb::TableError) -> Self {
        DatabaseError::Table(Box::new(e))
    }
}

impl From<redb::TransactionError> for DatabaseError {
    fn from(e: redb::TransactionError) -> Self {
        DatabaseError::Transaction(Box::new(e))
    }
}

#[derive(Clone)]
pub struct Database {
    db: Arc<RedbDatabase>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(data_dir.as_ref())?;
        let db_path = data_dir.as_ref().join("celebration-wall.redb");
        let db = Arc::new(RedbDatabase::create(db_path)?);

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SEQUENCES)?;
            for collection in ALL_COLLECTIONS {
                let _ = write_txn.open_table(collection.rows)?;
                let _ = write_txn.open_table(collection.by_time)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn begin_read(&self) -> Result<ReadTransaction, DatabaseError> {
        Ok(self.db.begin_read()?)
    }

    pub fn begin_write(&self) -> Result<WriteTransaction, DatabaseError> {
        Ok(self.db.begin_write()?)
    }

    // ========================================================================
    // Row primitives shared by every collection
    // ========================================================================

    /// Allocate the next id for `collection`, build the row from it, and store
    /// the row with its timestamp index entry in a single transaction.
    pub(super) fn insert_row<T, F>(
        &self,
        collection: Collection,
        timestamp: DateTime<Utc>,
        build: F,
    ) -> Result<T, DatabaseError>
    where
        T: Serialize,
        F: FnOnce(u64) -> T,
    {
        let write_txn = self.begin_write()?;
        let row = {
            let mut sequences = write_txn.open_table(SEQUENCES)?;
            let id = sequences
                .get(collection.name)?
                .map(|last| last.value())
                .unwrap_or(0)
                + 1;
            sequences.insert(collection.name, id)?;

            let row = build(id);
            let data = rmp_serde::to_vec_named(&row)?;

            let mut rows = write_txn.open_table(collection.rows)?;
            rows.insert(id, data.as_slice())?;

            let mut by_time = write_txn.open_table(collection.by_time)?;
            by_time.insert((timestamp.timestamp_micros(), id), ())?;

            row
        };
        write_txn.commit()?;
        Ok(row)
    }

    pub(super) fn get_row<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: u64,
    ) -> Result<Option<T>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let rows = read_txn.open_table(collection.rows)?;

        match rows.get(id)? {
            Some(data) => Ok(Some(rmp_serde::from_slice(data.value())?)),
            None => Ok(None),
        }
    }

    /// Newest first by timestamp, ties broken by the higher id.
    pub(super) fn list_rows<T: DeserializeOwned>(
        &self,
        collection: Collection,
        page: Page,
    ) -> Result<Listing<T>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let rows = read_txn.open_table(collection.rows)?;
        let by_time = read_txn.open_table(collection.by_time)?;

        let total = by_time.len()?;
        let limit = page.limit.map_or(usize::MAX, |l| l as usize);

        let mut items = Vec::new();
        for entry in by_time.iter()?.rev().skip(page.offset as usize).take(limit) {
            let (key, _) = entry?;
            let (_, id) = key.value();
            if let Some(data) = rows.get(id)? {
                items.push(rmp_serde::from_slice(data.value())?);
            }
        }

        Ok(Listing { items, total })
    }

    // ========================================================================
    // Admin operations
    // ========================================================================

    /// Remove every row from every collection. Id sequences are kept so ids
    /// are never reused.
    pub fn purge_all(&self) -> Result<PurgeStats, DatabaseError> {
        let write_txn = self.begin_write()?;
        let stats = PurgeStats {
            photos: clear_collection(&write_txn, PHOTO_COLLECTION)?,
            videos: clear_collection(&write_txn, VIDEO_COLLECTION)?,
            guestbook_messages: clear_collection(&write_txn, GUESTBOOK_COLLECTION)?,
        };
        write_txn.commit()?;
        Ok(stats)
    }
}

fn clear_collection(
    write_txn: &WriteTransaction,
    collection: Collection,
) -> Result<u64, DatabaseError> {
    let mut rows = write_txn.open_table(collection.rows)?;
    let removed = rows.len()?;
    rows.retain(|_, _| false)?;

    let mut by_time = write_txn.open_table(collection.by_time)?;
    by_time.retain(|_, _| false)?;

    Ok(removed)
}
