use crate::domain::model::RawRow;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the raw dataset rows come from (local file, HTTP download, ...).
/// Fetching happens strictly before the engine core runs; the core itself
/// never does I/O.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
