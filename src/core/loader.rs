use crate::core::store::RecordStore;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;

/// Builds the record store snapshot from a raw-row source. This is the only
/// place I/O meets the core: everything downstream of the returned store is
/// a pure in-memory query.
pub struct StoreLoader<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> StoreLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self) -> Result<RecordStore> {
        tracing::info!("Fetching raw dataset rows");
        let rows = self.source.fetch_rows().await?;
        tracing::info!("Fetched {} raw rows", rows.len());

        let store = RecordStore::load(rows)?;
        tracing::info!("Record store ready: {} records after dedup", store.len());

        Ok(store)
    }
}
