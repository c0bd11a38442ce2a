pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{output::OutputFormat, storage::LocalStorage};
pub use config::Settings;
pub use crate::core::{
    coerce::parse_numeric_or_default,
    engine::{GeofilterEngine, RunReport},
    geo::{haversine_km, GeoFilter},
    parser::LineParser,
    pipeline::{filter_customers, GeofilterPipeline},
    projector::project_and_sort,
};
pub use domain::model::{Coordinate, ReferencePoint, ResultRecord};
pub use utils::error::{FaultKind, GeofilterError, Result};
