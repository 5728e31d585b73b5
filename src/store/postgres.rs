use std::marker::PhantomData;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::{ensure_id, Document, DocumentStore, SortSpec};

/// JSONB-backed store: one table per collection with `(id, seq, doc)` columns.
///
/// Table names come from [`Document::COLLECTION`], which is a compile-time
/// constant, so interpolating it into SQL is safe.
pub struct PgDocumentStore<T> {
    pool: PgPool,
    _doc: PhantomData<fn() -> T>,
}

impl<T: Document> PgDocumentStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _doc: PhantomData,
        }
    }
}

fn upsert_sql<T: Document>() -> String {
    format!(
        "INSERT INTO {table} (id, doc) VALUES ($1, $2)
         ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc, updated_at = now()",
        table = T::COLLECTION
    )
}

#[async_trait]
impl<T: Document> DocumentStore<T> for PgDocumentStore<T> {
    #[instrument(skip(self, doc), fields(collection = T::COLLECTION))]
    async fn save(&self, mut doc: T) -> Result<T> {
        let id = ensure_id(&mut doc);
        sqlx::query(&upsert_sql::<T>())
            .bind(&id)
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .with_context(|| format!("saving {} {id}", T::COLLECTION))?;
        debug!(%id, "saved document");
        Ok(doc)
    }

    async fn find_all(&self, sort: SortSpec) -> Result<Vec<T>> {
        let rows: Vec<Json<T>> = match sort {
            SortSpec::Unsorted => {
                let sql = format!("SELECT doc FROM {} ORDER BY seq", T::COLLECTION);
                sqlx::query_scalar::<_, Json<T>>(&sql).fetch_all(&self.pool).await
            }
            SortSpec::Ascending(path) => {
                let sql = format!(
                    "SELECT doc FROM {} ORDER BY doc #>> $1 ASC NULLS FIRST, seq",
                    T::COLLECTION
                );
                let path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
                sqlx::query_scalar::<_, Json<T>>(&sql)
                    .bind(path)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .with_context(|| format!("listing {}", T::COLLECTION))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", T::COLLECTION);
        let row: Option<Json<T>> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("loading {} {id}", T::COLLECTION))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            T::COLLECTION
        );
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::COLLECTION);
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("deleting {} {id}", T::COLLECTION))?;
        debug!(collection = T::COLLECTION, %id, "deleted document");
        Ok(())
    }

    /// One transaction for the whole batch: either every row lands or none does.
    async fn save_all(&self, docs: Vec<T>) -> Result<Vec<T>> {
        let sql = upsert_sql::<T>();
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(docs.len());
        for mut doc in docs {
            let id = ensure_id(&mut doc);
            sqlx::query(&sql)
                .bind(&id)
                .bind(Json(&doc))
                .execute(&mut *tx)
                .await
                .with_context(|| format!("saving {} {id}", T::COLLECTION))?;
            saved.push(doc);
        }
        tx.commit().await?;
        debug!(collection = T::COLLECTION, count = saved.len(), "saved batch");
        Ok(saved)
    }
}
