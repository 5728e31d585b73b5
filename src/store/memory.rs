use std::marker::PhantomData;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ensure_id, sort_key, Document, DocumentStore, SortSpec};

/// Process-local store used when no database is configured, and by tests.
///
/// Documents are kept as JSON so reads behave like the database backend:
/// what comes back is what was serialized, never a shared reference.
pub struct MemoryStore<T> {
    docs: RwLock<Vec<(String, serde_json::Value)>>,
    _doc: PhantomData<fn() -> T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
            _doc: PhantomData,
        }
    }
}

impl<T: Document> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for MemoryStore<T> {
    async fn save(&self, mut doc: T) -> Result<T> {
        let id = ensure_id(&mut doc);
        let value = serde_json::to_value(&doc)?;
        let mut docs = self.docs.write().await;
        match docs.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = value,
            None => docs.push((id.clone(), value)),
        }
        debug!(collection = T::COLLECTION, %id, "saved document");
        Ok(doc)
    }

    async fn find_all(&self, sort: SortSpec) -> Result<Vec<T>> {
        let docs = self.docs.read().await;
        let mut values: Vec<&serde_json::Value> = docs.iter().map(|(_, v)| v).collect();
        if let SortSpec::Ascending(path) = sort {
            values.sort_by_cached_key(|v| sort_key(v, path));
        }
        values
            .into_iter()
            .map(|v| -> Result<T> { Ok(serde_json::from_value(v.clone())?) })
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let docs = self.docs.read().await;
        docs.iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, v)| serde_json::from_value(v.clone()))
            .transpose()
            .map_err(Into::into)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.docs.read().await.iter().any(|(existing, _)| existing == id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.docs.write().await.retain(|(existing, _)| existing != id);
        debug!(collection = T::COLLECTION, %id, "deleted document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Distribution, Distributor, Figurine};
    use crate::store::BY_JPY_RELEASE;
    use chrono::NaiveDate;

    fn released(name: &str, release: Option<NaiveDate>) -> Figurine {
        Figurine {
            distribution_jpy: release.map(|d| Distribution {
                release_date: Some(d),
                ..Distribution::default()
            }),
            ..Figurine::new(name)
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_replaces_existing() {
        let store = MemoryStore::<Distributor>::new();
        let saved = store
            .save(Distributor {
                id: None,
                name: "DAM".into(),
            })
            .await
            .unwrap();
        let id = saved.id.clone().expect("assigned id");

        let renamed = Distributor {
            name: "DTM".into(),
            ..saved
        };
        store.save(renamed).await.unwrap();

        let all = store.find_all(SortSpec::Unsorted).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "DTM");
        assert!(store.exists_by_id(&id).await.unwrap());

        store.delete_by_id(&id).await.unwrap();
        assert!(store.find_by_id(&id).await.unwrap().is_none());
        assert!(!store.exists_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn sorts_by_release_with_missing_dates_first() {
        let store = MemoryStore::<Figurine>::new();
        let d = |y| NaiveDate::from_ymd_opt(y, 1, 1);
        for (name, release) in [("b", d(2020)), ("none", None), ("a", d(2003)), ("c", d(2010))] {
            store.save(released(name, release)).await.unwrap();
        }
        let names: Vec<_> = store
            .find_all(BY_JPY_RELEASE)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.base_name)
            .collect();
        assert_eq!(names, vec!["none", "a", "c", "b"]);
    }
}
