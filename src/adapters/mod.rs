// Adapters layer: concrete implementations for external systems (dataset
// sources, storage). The engine core only sees the ports in domain/ports.rs.

pub mod source;
pub mod storage;

pub use source::{CsvFileSource, HttpCsvSource};
pub use storage::LocalStorage;
