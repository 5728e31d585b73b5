//! Service layer: owns persistence and turns store documents into catalog views.

pub mod catalogs;
pub mod figurines;
pub mod references;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::model::{DistributionChannel, Distributor, Figurine};
use crate::store::{DocumentStore, MemoryStore, PgDocumentStore};
use crate::util::db::Db;
use crate::util::env;

pub use catalogs::Catalog;
pub use figurines::{read_source_csv, FigurineService};
pub use references::{DistributionChannelService, DistributorService, ReferenceService};

/// Every service, wired to one set of stores.
#[derive(Clone)]
pub struct Services {
    pub figurines: FigurineService,
    pub distributors: DistributorService,
    pub channels: DistributionChannelService,
}

impl Services {
    pub fn from_stores(
        figurines: Arc<dyn DocumentStore<Figurine>>,
        distributors: Arc<dyn DocumentStore<Distributor>>,
        channels: Arc<dyn DocumentStore<DistributionChannel>>,
    ) -> Self {
        Self {
            figurines: FigurineService::new(figurines, distributors.clone(), channels.clone()),
            distributors: ReferenceService::new(distributors),
            channels: ReferenceService::new(channels),
        }
    }

    /// Process-local stores; contents are lost on exit.
    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(MemoryStore::<Figurine>::new()),
            Arc::new(MemoryStore::<Distributor>::new()),
            Arc::new(MemoryStore::<DistributionChannel>::new()),
        )
    }

    pub fn postgres(db: &Db) -> Self {
        Self::from_stores(
            Arc::new(PgDocumentStore::<Figurine>::new(db.pool.clone())),
            Arc::new(PgDocumentStore::<Distributor>::new(db.pool.clone())),
            Arc::new(PgDocumentStore::<DistributionChannel>::new(db.pool.clone())),
        )
    }

    /// PostgreSQL when `DATABASE_URL` is set, in-memory otherwise.
    pub async fn from_env() -> Result<Self> {
        match env::db_url() {
            Some(url) => {
                let max_conns = env::env_parse("DB_MAX_CONNS", 10u32);
                let db = Db::connect(&url, max_conns).await?;
                info!(max_conns, "using postgres document store");
                Ok(Self::postgres(&db))
            }
            None => {
                warn!("DATABASE_URL not set; using in-memory store (data is not persisted)");
                Ok(Self::in_memory())
            }
        }
    }
}
