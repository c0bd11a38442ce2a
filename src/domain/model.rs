use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 預設參考點（辦公室座標）與常數
pub const DEFAULT_REFERENCE_LATITUDE: f64 = 19.0590317;
pub const DEFAULT_REFERENCE_LONGITUDE: f64 = 72.7553452;
pub const DEFAULT_RADIUS_KM: f64 = 100.0;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 一行輸入解析後的原始紀錄，不做任何 schema 檢查
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl RawRecord {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }
}

/// 十進位度數座標，不驗證範圍
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub origin: Coordinate,
    pub radius_km: f64,
    pub earth_radius_km: f64,
}

impl ReferencePoint {
    pub fn new(origin: Coordinate, radius_km: f64) -> Self {
        Self {
            origin,
            radius_km,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::new(
            Coordinate::new(DEFAULT_REFERENCE_LATITUDE, DEFAULT_REFERENCE_LONGITUDE),
            DEFAULT_RADIUS_KM,
        )
    }
}

/// 從 RawRecord 強制轉型後的客戶資料
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
    pub location: Coordinate,
}

/// 輸出只保留 id 與 name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub records_parsed: usize,
    pub records_retained: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub customers: Vec<ResultRecord>,
    pub stats: RunStats,
}

/// 結果輸出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Jsonl,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
