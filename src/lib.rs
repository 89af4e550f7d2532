pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{CsvFileSource, HttpCsvSource, LocalStorage};
pub use config::Settings;
pub use crate::core::aggregate::{county_counts, top_n, year_counts};
pub use crate::core::category::{category_labels, classify};
pub use crate::core::chart::build_chart_spec;
pub use crate::core::loader::StoreLoader;
pub use crate::core::store::{mean_position, RecordStore};
pub use domain::model::{ChartSpec, RawRow, SiteRecord};
pub use utils::error::{Result, SiteError};
