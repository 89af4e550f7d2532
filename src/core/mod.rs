pub mod aggregate;
pub mod category;
pub mod chart;
pub mod loader;
pub mod store;

pub use crate::domain::model::{ChartSpec, RawRow, SiteRecord};
pub use crate::domain::ports::{RecordSource, Storage};
pub use crate::utils::error::Result;
