//! Generic CRUD over one table of records.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, warn};
use uuid::Uuid;

use super::codec::{self, AttributeMap};
use super::store::AttributeStore;
use crate::core::models::{Record, RecordKey};
use crate::errors::ResumeError;

pub const MISSING_ID_MESSAGE: &str = "must have an id to delete";

/// A page of decoded records plus the key to resume from, if any.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<AttributeMap>,
}

/// Repository for records of type `T` held in a single table.
///
/// Holds no connection of its own; every call is one independent request
/// to the underlying store.
pub struct RecordStore<T, S: ?Sized> {
    store: Arc<S>,
    table: String,
    read_limit: i32,
    _record: PhantomData<fn() -> T>,
}

impl<T, S> RecordStore<T, S>
where
    T: Record,
    S: AttributeStore + ?Sized,
{
    pub fn new(store: Arc<S>, table: impl Into<String>, read_limit: i32) -> Self {
        Self {
            store,
            table: table.into(),
            read_limit,
            _record: PhantomData,
        }
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Read up to `read_limit` records in stored order.
    ///
    /// This is a hard cap: if the table holds more, the rest are not
    /// fetched. Use [`RecordStore::scan_page`] to walk the whole table.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Store`] if the scan fails, or
    /// [`ResumeError::Codec`] if an item does not decode into `T`.
    pub async fn scan_all(&self) -> Result<Vec<T>, ResumeError> {
        let page = self.scan_page(None).await?;
        if page.next.is_some() {
            warn!(
                table = %self.table,
                read_limit = self.read_limit,
                "scan truncated at read limit; remaining items not returned"
            );
        }
        Ok(page.items)
    }

    /// Read one page of records, starting after `start` when given.
    ///
    /// # Errors
    ///
    /// Same as [`RecordStore::scan_all`].
    pub async fn scan_page(&self, start: Option<AttributeMap>) -> Result<Page<T>, ResumeError> {
        let page = self.store.scan(&self.table, self.read_limit, start).await?;
        debug!(table = %self.table, count = page.items.len(), "scanned items");

        let items = page
            .items
            .iter()
            .map(codec::from_item)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(Page {
            items,
            next: page.last_evaluated_key,
        })
    }

    /// Insert or fully replace `record`, assigning a fresh id when it has none.
    ///
    /// Returns the record as written.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Store`] if the write fails.
    pub async fn upsert(&self, mut record: T) -> Result<T, ResumeError> {
        if record.id().is_none_or(str::is_empty) {
            record.set_id(Uuid::new_v4().to_string());
        }

        let item = codec::to_item(&record)?;
        self.store.put_item(&self.table, item).await?;
        debug!(table = %self.table, id = record.id().unwrap_or_default(), "upserted record");
        Ok(record)
    }

    /// Delete the record identified by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Validation`] without touching the store when
    /// `key` has no id, or [`ResumeError::Store`] if the delete fails.
    pub async fn delete(&self, key: &RecordKey) -> Result<(), ResumeError> {
        let id = match key.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ResumeError::Validation(MISSING_ID_MESSAGE.to_string())),
        };

        let item_key = HashMap::from([("id".to_string(), AttributeValue::S(id.to_string()))]);
        self.store.delete_item(&self.table, item_key).await?;
        debug!(table = %self.table, id = %id, "deleted record");
        Ok(())
    }
}
