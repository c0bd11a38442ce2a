pub mod coerce;
pub mod engine;
pub mod geo;
pub mod parser;
pub mod pipeline;
pub mod projector;

pub use crate::domain::model::{
    Coordinate, CustomerRecord, FilterOutcome, RawRecord, ReferencePoint, ResultRecord, RunStats,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
