//! Read-only lookups over the closed vocabularies.

use std::str::FromStr;

use crate::error::{ServiceError, ServiceResult};
use crate::model::{Anniversary, CatalogKeyDescription, Category, Describable, LineUp, Series};

/// Which vocabulary a lookup targets. Parsed from the URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    LineUps,
    Series,
    Categories,
    Anniversaries,
}

impl FromStr for Catalog {
    type Err = ServiceError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        match segment {
            "lineups" => Ok(Catalog::LineUps),
            "series" => Ok(Catalog::Series),
            "categories" => Ok(Catalog::Categories),
            "anniversaries" => Ok(Catalog::Anniversaries),
            other => Err(ServiceError::CatalogItemNotFound(format!(
                "Unknown catalog: {other}"
            ))),
        }
    }
}

impl Catalog {
    pub fn items(self) -> Vec<CatalogKeyDescription> {
        match self {
            Catalog::LineUps => all::<LineUp>(),
            Catalog::Series => all::<Series>(),
            Catalog::Categories => all::<Category>(),
            Catalog::Anniversaries => all::<Anniversary>(),
        }
    }

    pub fn item(self, key: &str) -> ServiceResult<CatalogKeyDescription> {
        match self {
            Catalog::LineUps => by_key::<LineUp>(key),
            Catalog::Series => by_key::<Series>(key),
            Catalog::Categories => by_key::<Category>(key),
            Catalog::Anniversaries => by_key::<Anniversary>(key),
        }
    }
}

/// Every value of `E`, in declaration order.
pub fn all<E: Describable>() -> Vec<CatalogKeyDescription> {
    E::ALL.iter().copied().map(CatalogKeyDescription::of).collect()
}

pub fn by_key<E: Describable>(key: &str) -> ServiceResult<CatalogKeyDescription> {
    E::from_key(key)
        .map(CatalogKeyDescription::of)
        .ok_or_else(|| {
            ServiceError::CatalogItemNotFound(format!(
                "Unable to find a valid catalog using id: {key}"
            ))
        })
}
