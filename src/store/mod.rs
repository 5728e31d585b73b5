//! Document persistence.
//!
//! The service layer only sees [`DocumentStore`]; which backend sits behind it
//! is decided once at startup from `DATABASE_URL`.

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::model::{DistributionChannel, Distributor, Figurine};

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// A value stored as one JSON document in a named collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection (table) name.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

impl Document for Figurine {
    const COLLECTION: &'static str = "figurines";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl Document for Distributor {
    const COLLECTION: &'static str = "distributors";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl Document for DistributionChannel {
    const COLLECTION: &'static str = "distribution_channels";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Ordering requested from [`DocumentStore::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSpec {
    /// Insertion order.
    Unsorted,
    /// Ascending on the value at a JSON path, missing or null values first.
    Ascending(&'static [&'static str]),
}

/// Figurines in store order: JPY release date ascending.
pub const BY_JPY_RELEASE: SortSpec = SortSpec::Ascending(&["distributionJPY", "releaseDate"]);

#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Insert or replace. Documents without an id get a fresh one.
    async fn save(&self, doc: T) -> Result<T>;

    async fn find_all(&self, sort: SortSpec) -> Result<Vec<T>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()>;

    async fn save_all(&self, docs: Vec<T>) -> Result<Vec<T>> {
        let mut saved = Vec::with_capacity(docs.len());
        for doc in docs {
            saved.push(self.save(doc).await?);
        }
        Ok(saved)
    }
}

/// Sort key at `path` inside a serialized document. Dates serialize as
/// ISO-8601 strings, so string order is date order.
pub(crate) fn sort_key(doc: &Value, path: &[&str]) -> Option<String> {
    let value = path.iter().try_fold(doc, |v, segment| v.get(segment))?;
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// The document's id, assigning a fresh one first when it has none.
pub(crate) fn ensure_id<T: Document>(doc: &mut T) -> String {
    if let Some(id) = doc.id() {
        return id.to_string();
    }
    let id = new_id();
    doc.set_id(id.clone());
    id
}
