pub mod adapters;
pub mod config;
pub mod domain;
pub mod store;
pub mod utils;

pub use adapters::http::HttpApi;
pub use config::ClientConfig;
pub use domain::model::{Dimension, FieldUpdate, Severity, WorkQuery, Workset};
pub use domain::ports::{ConfigProvider, PythiaApi};
pub use store::{compose_query, DateRangePreset, Store, YopUpdate};
pub use utils::error::{PythiaError, Result};
