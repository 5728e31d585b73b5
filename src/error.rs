use thiserror::Error;

/// Failure to coerce one raw bulk-import field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Invalid date format: {raw} (field: {field})")]
    InvalidDate { field: &'static str, raw: String },
    #[error("Invalid amount: {raw} (field: {field})")]
    InvalidAmount { field: &'static str, raw: String },
}

impl MappingError {
    pub fn field(&self) -> &'static str {
        match self {
            MappingError::InvalidDate { field, .. } | MappingError::InvalidAmount { field, .. } => {
                field
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Figurine not found with id: {0}")]
    FigurineNotFound(String),
    #[error("Unable to find a valid distributor using id: {0}")]
    DistributorNotFound(String),
    #[error("Unable to find a valid distribution channel using id: {0}")]
    DistributionChannelNotFound(String),
    #[error("{0}")]
    CatalogItemNotFound(String),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("row {row}: {source}")]
    Mapping {
        row: usize,
        #[source]
        source: MappingError,
    },
    #[error("Unable to load figurines: {0}")]
    Bulk(String),
    #[error("store: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> Self {
        ServiceError::Bulk(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
