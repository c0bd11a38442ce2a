use crate::adapters::output::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{Coordinate, ReferencePoint};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "geofilter")]
#[command(about = "Find customers within a radius of a reference point from a JSON Lines file")]
pub struct CliConfig {
    #[arg(long, short, help = "JSON Lines input file, or '-' for stdin")]
    pub input: String,

    #[arg(long, short, help = "Write results to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, value_enum, help = "Output format [default: json]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, allow_hyphen_values = true, help = "Reference latitude in decimal degrees")]
    pub latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true, help = "Reference longitude in decimal degrees")]
    pub longitude: Option<f64>,

    #[arg(long, help = "Search radius in kilometers")]
    pub radius_km: Option<f64>,

    #[arg(long, help = "Earth radius in kilometers")]
    pub earth_radius_km: Option<f64>,

    #[arg(long, short, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併設定：命令列 > 設定檔 > 內建預設
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> Settings {
        let defaults = ReferencePoint::default();
        let reference = ReferencePoint {
            origin: Coordinate::new(
                self.latitude
                    .or(file.reference.latitude)
                    .unwrap_or(defaults.origin.latitude),
                self.longitude
                    .or(file.reference.longitude)
                    .unwrap_or(defaults.origin.longitude),
            ),
            radius_km: self
                .radius_km
                .or(file.reference.radius_km)
                .unwrap_or(defaults.radius_km),
            earth_radius_km: self
                .earth_radius_km
                .or(file.reference.earth_radius_km)
                .unwrap_or(defaults.earth_radius_km),
        };

        Settings {
            input_path: self.input.clone(),
            output_path: self.output.clone().or(file.output.path),
            output_format: self.format.or(file.output.format).unwrap_or_default(),
            pretty: self.pretty || file.output.pretty.unwrap_or(false),
            reference,
        }
    }
}
