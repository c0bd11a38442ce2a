use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeofilterError {
    #[error("Invalid JSON on line {line}: {source}")]
    ParseError {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類：輸入資料、設定、系統
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

/// 對外只有兩種故障：解析失敗（客戶端錯誤）與其他非預期錯誤（伺服端錯誤）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Parse,
    Unexpected,
}

impl GeofilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeofilterError::ParseError { .. } => ErrorCategory::Input,
            GeofilterError::ConfigError { .. } | GeofilterError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GeofilterError::IoError(_)
            | GeofilterError::SerializationError(_)
            | GeofilterError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn fault_kind(&self) -> FaultKind {
        match self {
            GeofilterError::ParseError { .. } => FaultKind::Parse,
            _ => FaultKind::Unexpected,
        }
    }

    /// 給使用者看的訊息，系統錯誤不洩漏內部細節
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => "Invalid JSON format in file".to_string(),
            ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::System => "An error occurred while processing the file".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeofilterError::ParseError { .. } => {
                "Make sure every non-empty line of the file is a single JSON object"
            }
            GeofilterError::IoError(_) => "Check that the input file exists, is readable and is UTF-8 text",
            GeofilterError::SerializationError(_) | GeofilterError::CsvError(_) => {
                "Try another output format or check the output destination"
            }
            GeofilterError::ConfigError { .. } => "Check the configuration file path and syntax",
            GeofilterError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and run again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeofilterError>;
