use crate::domain::model::RawRow;
use crate::domain::ports::{RecordSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Parses CSV bytes into raw rows. A missing column or malformed row is a
/// fatal load error; the store never gets built from partial input.
pub fn parse_csv_rows(data: &[u8]) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_reader(data);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Dataset source backed by a CSV file on a storage backend.
pub struct CsvFileSource<S: Storage> {
    storage: S,
    file: String,
}

impl<S: Storage> CsvFileSource<S> {
    pub fn new(storage: S, file: String) -> Self {
        Self { storage, file }
    }
}

#[async_trait]
impl<S: Storage> RecordSource for CsvFileSource<S> {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        tracing::debug!("Reading dataset file: {}", self.file);
        let data = self.storage.read_file(&self.file).await?;
        parse_csv_rows(&data)
    }
}

/// Dataset source that downloads the CSV from an HTTP(S) endpoint.
pub struct HttpCsvSource {
    client: Client,
    url: String,
}

impl HttpCsvSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl RecordSource for HttpCsvSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        tracing::debug!("Downloading dataset from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes", body.len());
        parse_csv_rows(&body)
    }
}
