use std::io::Read;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{BasicFigurine, DistributionChannel, Distributor, Figurine, SourceFigurine};
use crate::normalization::FigurineMapper;
use crate::presentation::{list_catalog, populate_derived, today};
use crate::store::{DocumentStore, SortSpec, BY_JPY_RELEASE};

/// Parse a bulk-import CSV into raw rows. Columns are matched by header name;
/// optional columns may be missing entirely.
pub fn read_source_csv<R: Read>(reader: R) -> ServiceResult<Vec<SourceFigurine>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let rows = rdr
        .deserialize::<SourceFigurine>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Figurine lifecycle: persistence plus derived-field presentation.
#[derive(Clone)]
pub struct FigurineService {
    figurines: Arc<dyn DocumentStore<Figurine>>,
    distributors: Arc<dyn DocumentStore<Distributor>>,
    channels: Arc<dyn DocumentStore<DistributionChannel>>,
}

impl FigurineService {
    pub fn new(
        figurines: Arc<dyn DocumentStore<Figurine>>,
        distributors: Arc<dyn DocumentStore<Distributor>>,
        channels: Arc<dyn DocumentStore<DistributionChannel>>,
    ) -> Self {
        Self {
            figurines,
            distributors,
            channels,
        }
    }

    /// Snapshot the reference catalogs into a mapper for one import run.
    pub async fn mapper(&self) -> ServiceResult<FigurineMapper> {
        let distributors = self.distributors.find_all(SortSpec::Unsorted).await?;
        let channels = self.channels.find_all(SortSpec::Unsorted).await?;
        Ok(FigurineMapper::new(distributors, channels))
    }

    /// Map every row, stopping at the first one that fails. Nothing is stored.
    pub async fn map_rows(&self, rows: &[SourceFigurine]) -> ServiceResult<Vec<Figurine>> {
        let mapper = self.mapper().await?;
        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                mapper.map_record(row).map_err(|source| {
                    warn!(row = idx + 1, error = %source, "bulk row rejected");
                    ServiceError::Mapping {
                        row: idx + 1,
                        source,
                    }
                })
            })
            .collect()
    }

    /// Map the whole batch, then store it. A mapping failure stores nothing.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn import(&self, rows: Vec<SourceFigurine>) -> ServiceResult<Vec<Figurine>> {
        let mapped = self.map_rows(&rows).await?;
        let stored = self
            .figurines
            .save_all(mapped.into_iter().map(Figurine::without_derived).collect())
            .await?;
        let today = today();
        info!(count = stored.len(), "bulk import stored");
        Ok(stored
            .into_iter()
            .map(|f| populate_derived(f, today))
            .collect())
    }

    pub async fn create(&self, figurine: Figurine) -> ServiceResult<Figurine> {
        check(&figurine)?;
        info!(name = %figurine.base_name, "creating figurine");
        let created = self.figurines.save(figurine.without_derived()).await?;
        info!(id = created.id.as_deref().unwrap_or_default(), "figurine created");
        Ok(populate_derived(created, today()))
    }

    /// Replace every mutable field of an existing figurine, keeping its id.
    pub async fn update(&self, id: &str, changes: Figurine) -> ServiceResult<Figurine> {
        check(&changes)?;
        info!(%id, "updating figurine");
        let mut existing = self
            .figurines
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::FigurineNotFound(id.to_string()))?;
        existing.apply_changes(changes);
        let updated = self.figurines.save(existing).await?;
        info!(%id, "figurine updated");
        Ok(populate_derived(updated, today()))
    }

    pub async fn get(&self, id: &str) -> ServiceResult<Figurine> {
        info!(%id, "retrieving figurine");
        self.figurines
            .find_by_id(id)
            .await?
            .map(|f| populate_derived(f, today()))
            .ok_or_else(|| ServiceError::FigurineNotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        if !self.figurines.exists_by_id(id).await? {
            return Err(ServiceError::FigurineNotFound(id.to_string()));
        }
        self.figurines.delete_by_id(id).await?;
        info!(%id, "figurine deleted");
        Ok(())
    }

    pub async fn list(&self, exclude_restocks: bool) -> ServiceResult<Vec<Figurine>> {
        info!(exclude_restocks, "retrieving all figurines");
        let stored = self.figurines.find_all(BY_JPY_RELEASE).await?;
        let listing = list_catalog(stored, exclude_restocks, today());
        info!(count = listing.len(), "found figurines");
        Ok(listing)
    }

    pub async fn list_basic(&self, exclude_restocks: bool) -> ServiceResult<Vec<BasicFigurine>> {
        Ok(self
            .list(exclude_restocks)
            .await?
            .into_iter()
            .map(BasicFigurine::from)
            .collect())
    }
}

fn check(figurine: &Figurine) -> ServiceResult<()> {
    let errors = figurine.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Distribution, LineUp, Status};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    const SHEET: &str = "\
Base Name,Price (JPY),Announcement (JPY),Preorder (JPY),Release (JPY),Distributor (MXN),Price (MXN),Distribution,LineUp,Series,Group,Metal,OCE
Phoenix Ikki,\"¥15,400\",4/21/2024,4/26/2024,10/26/2024,DAM,\"$2,750\",Stores,Myth Cloth EX,Saint Seiya,Bronze Saint V3,FALSE,FALSE
Pegasus Seiya,\"¥4,000\",,,11/2003,,,Stores,Myth Cloth,Saint Seiya,Bronze Saint V1,FALSE,FALSE
Pegasus Seiya,\"¥8,000\",,,5/2012,,,Tamashii Web Shop,Myth Cloth,Saint Seiya,Bronze Saint V1,FALSE,FALSE
";

    async fn service() -> FigurineService {
        let distributors: Arc<dyn DocumentStore<Distributor>> =
            Arc::new(MemoryStore::<Distributor>::new());
        distributors
            .save(Distributor::new("1", "DAM"))
            .await
            .unwrap();
        let channels: Arc<dyn DocumentStore<DistributionChannel>> =
            Arc::new(MemoryStore::<DistributionChannel>::new());
        for (id, label) in [("1", "Stores"), ("2", "Tamashii Web Shop")] {
            channels
                .save(DistributionChannel::new(id, label))
                .await
                .unwrap();
        }
        FigurineService::new(
            Arc::new(MemoryStore::<Figurine>::new()),
            distributors,
            channels,
        )
    }

    #[test]
    fn reads_rows_with_missing_optional_columns() {
        let rows = read_source_csv(SHEET.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].base_name, "Phoenix Ikki");
        assert_eq!(rows[0].price_jpy, "¥15,400");
        assert_eq!(rows[1].release_jpy, "11/2003");
        assert_eq!(rows[2].remarks, "");
    }

    #[test]
    fn unreadable_csv_is_a_bulk_error() {
        let err = read_source_csv("Price (JPY)\n¥100\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ServiceError::Bulk(_)));
    }

    #[tokio::test]
    async fn import_stores_rows_and_lists_with_restocks_folded() {
        let svc = service().await;
        let rows = read_source_csv(SHEET.as_bytes()).unwrap();
        let imported = svc.import(rows).await.unwrap();
        assert_eq!(imported.len(), 3);
        assert!(imported.iter().all(|f| f.id.is_some()));
        let phoenix = &imported[0];
        assert_eq!(
            phoenix.displayable_name.as_deref(),
            Some("Phoenix Ikki [Final Bronze Cloth]")
        );
        assert_eq!(
            phoenix
                .distribution_mxn
                .as_ref()
                .and_then(|d| d.distributor.as_ref())
                .map(|d| d.name.as_str()),
            Some("DAM")
        );

        let grouped = svc.list(true).await.unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].base_name, "Phoenix Ikki");
        let pegasus = &grouped[1];
        assert_eq!(pegasus.line_up, Some(LineUp::MythCloth));
        let restocks = pegasus.restocks.as_ref().expect("restocks");
        assert_eq!(restocks.len(), 1);
        assert_eq!(
            restocks[0]
                .distribution_channel
                .as_ref()
                .map(|c| c.distribution.as_str()),
            Some("Tamashii Web Shop")
        );

        let everything = svc.list(false).await.unwrap();
        assert_eq!(everything.len(), 3);
        let basic = svc.list_basic(true).await.unwrap();
        assert_eq!(basic.len(), 2);
        assert_eq!(basic[1].category, Some(Category::V1));
        assert_eq!(basic[1].status, Some(Status::Released));
    }

    #[tokio::test]
    async fn failing_row_aborts_the_whole_batch() {
        let svc = service().await;
        let sheet = "Base Name,Release (JPY)\nPegasus Seiya,11/2003\nDragon Shiryu,someday\n";
        let rows = read_source_csv(sheet.as_bytes()).unwrap();
        let err = svc.import(rows).await.unwrap_err();
        match err {
            ServiceError::Mapping { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.field(), "Release (JPY)");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(svc.list(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_update_get_delete() {
        let svc = service().await;
        let input = Figurine {
            distribution_jpy: Some(Distribution {
                release_date: NaiveDate::from_ymd_opt(2003, 11, 1),
                ..Distribution::default()
            }),
            category: Some(Category::V1),
            displayable_name: Some("client supplied".into()),
            ..Figurine::new("Pegasus Seiya")
        };
        let created = svc.create(input).await.unwrap();
        let id = created.id.clone().expect("id");
        assert_eq!(created.displayable_name.as_deref(), Some("Pegasus Seiya"));
        assert_eq!(created.status, Some(Status::Released));

        let changes = Figurine {
            golden: true,
            category: Some(Category::V1),
            ..Figurine::new("Pegasus Seiya")
        };
        let updated = svc.update(&id, changes).await.unwrap();
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(
            updated.displayable_name.as_deref(),
            Some("Pegasus Seiya (Early Bronze Cloth) ~Limited Gold Pegasus~")
        );
        assert_eq!(updated.status, Some(Status::ReleaseTbd));

        let fetched = svc.get(&id).await.unwrap();
        assert_eq!(fetched, updated);

        svc.delete(&id).await.unwrap();
        assert!(matches!(
            svc.get(&id).await.unwrap_err(),
            ServiceError::FigurineNotFound(_)
        ));
        assert!(matches!(
            svc.delete(&id).await.unwrap_err(),
            ServiceError::FigurineNotFound(_)
        ));
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_storage() {
        let svc = service().await;
        let err = svc.create(Figurine::new("Ab")).await.unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors, vec!["baseName: size must be between 3 and 20"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(svc.list(false).await.unwrap().is_empty());

        let err = svc
            .update("missing", Figurine::new("Pegasus Seiya"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::FigurineNotFound(_)));
    }
}
