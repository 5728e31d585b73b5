//! CRUD for the reference catalogs the bulk mapper resolves names against.

use std::sync::Arc;

use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::model::{DistributionChannel, Distributor};
use crate::store::{Document, DocumentStore, SortSpec};

/// A reference catalog entry: stored as a document, validated on write.
pub trait Reference: Document {
    /// Singular noun used in log lines.
    const KIND: &'static str;

    fn validate(&self) -> Vec<String>;

    fn not_found(id: &str) -> ServiceError;
}

impl Reference for Distributor {
    const KIND: &'static str = "distributor";

    fn validate(&self) -> Vec<String> {
        Distributor::validate(self)
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::DistributorNotFound(id.to_string())
    }
}

impl Reference for DistributionChannel {
    const KIND: &'static str = "distribution channel";

    fn validate(&self) -> Vec<String> {
        DistributionChannel::validate(self)
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::DistributionChannelNotFound(id.to_string())
    }
}

pub struct ReferenceService<T: Reference> {
    store: Arc<dyn DocumentStore<T>>,
}

impl<T: Reference> Clone for ReferenceService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

pub type DistributorService = ReferenceService<Distributor>;
pub type DistributionChannelService = ReferenceService<DistributionChannel>;

impl<T: Reference> ReferenceService<T> {
    pub fn new(store: Arc<dyn DocumentStore<T>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, item: T) -> ServiceResult<T> {
        check(&item)?;
        info!(kind = T::KIND, "creating reference entry");
        Ok(self.store.save(item).await?)
    }

    pub async fn list(&self) -> ServiceResult<Vec<T>> {
        Ok(self.store.find_all(SortSpec::Unsorted).await?)
    }

    pub async fn get(&self, id: &str) -> ServiceResult<T> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| T::not_found(id))
    }

    /// Replace an existing entry; the path id wins over any id in the body.
    pub async fn update(&self, id: &str, mut item: T) -> ServiceResult<T> {
        check(&item)?;
        if !self.store.exists_by_id(id).await? {
            return Err(T::not_found(id));
        }
        item.set_id(id.to_string());
        info!(kind = T::KIND, %id, "updating reference entry");
        Ok(self.store.save(item).await?)
    }

    /// Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.store.delete_by_id(id).await?;
        info!(kind = T::KIND, %id, "deleted reference entry");
        Ok(())
    }
}

fn check<T: Reference>(item: &T) -> ServiceResult<()> {
    let errors = item.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}
