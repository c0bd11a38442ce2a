use crate::adapters::output::render;
use crate::core::pipeline::GeofilterPipeline;
use crate::domain::model::RunStats;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub stats: RunStats,
    pub customers: usize,
    /// 已輸出的內容；`written_to` 為 None 時由呼叫端寫到 stdout
    pub rendered: Vec<u8>,
    pub written_to: Option<String>,
}

pub struct GeofilterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GeofilterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<RunReport> {
        let reference = self.config.reference_point();
        tracing::info!(
            "Filtering customers within {} km of ({}, {})",
            reference.radius_km,
            reference.origin.latitude,
            reference.origin.longitude
        );

        // Extract + Transform
        let reader = self.storage.open(self.config.input_path())?;
        let outcome = GeofilterPipeline::new(reference).run(reader)?;
        tracing::info!(
            "Parsed {} records from {} lines, {} within radius",
            outcome.stats.records_parsed,
            outcome.stats.lines_read,
            outcome.stats.records_retained
        );

        // Load
        let format = self.config.output_format();
        let rendered = render(&outcome.customers, format, self.config.pretty())?;
        let written_to = match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {} bytes of {} to {}", rendered.len(), format, path);
                self.storage.write_file(path, &rendered)?;
                Some(path.to_string())
            }
            None => None,
        };

        Ok(RunReport {
            stats: outcome.stats,
            customers: outcome.customers.len(),
            rendered,
            written_to,
        })
    }
}
