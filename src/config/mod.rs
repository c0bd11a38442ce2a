#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::output::OutputFormat;
use crate::domain::model::ReferencePoint;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive, validate_range, Validate};

/// 合併後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input_path: String,
    pub output_path: Option<String>,
    pub output_format: OutputFormat,
    pub pretty: bool,
    pub reference: ReferencePoint,
}

impl Settings {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            output_format: OutputFormat::default(),
            pretty: false,
            reference: ReferencePoint::default(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        if let Some(output) = &self.output_path {
            validate_path("output.path", output)?;
        }

        let reference = &self.reference;
        validate_range("reference.latitude", reference.origin.latitude, -90.0, 90.0)?;
        validate_range("reference.longitude", reference.origin.longitude, -180.0, 180.0)?;
        validate_positive("reference.radius_km", reference.radius_km)?;
        validate_positive("reference.earth_radius_km", reference.earth_radius_km)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn pretty(&self) -> bool {
        self.pretty
    }

    fn reference_point(&self) -> ReferencePoint {
        self.reference
    }
}
