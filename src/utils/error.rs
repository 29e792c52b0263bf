use thiserror::Error;

#[derive(Error, Debug)]
pub enum CutError {
    #[error("Could not understand prompt: {prompt:?}")]
    PromptNotUnderstood { prompt: String },

    #[error("Part '{part}' is missing required field '{field}'")]
    MissingField { part: String, field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, CutError>;

/// 錯誤來源分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
}

/// 錯誤嚴重程度，CLI 依此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CutError::PromptNotUnderstood { .. }
            | CutError::MissingField { .. }
            | CutError::CsvError(_)
            | CutError::SerializationError(_) => ErrorCategory::Input,
            CutError::TomlError(_)
            | CutError::InvalidConfigValueError { .. }
            | CutError::ValidationError { .. } => ErrorCategory::Configuration,
            CutError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CutError::PromptNotUnderstood { .. } => ErrorSeverity::Medium,
            CutError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CutError::PromptNotUnderstood { .. } => {
                "Try again with clearer dimensions and terms, e.g. '2x2 ft table with four 28-inch legs'"
            }
            CutError::MissingField { .. } => {
                "Every part needs a name, a width and a height; qty defaults to 1"
            }
            CutError::IoError(_) => {
                "Check that the input file exists and is readable, and that the output directory is writable"
            }
            CutError::CsvError(_) => "Use a header row of part,qty,width,height",
            CutError::SerializationError(_) => "Provide a JSON array of {part, qty, width, height} objects",
            CutError::TomlError(_) => "Check the TOML syntax of the job file",
            CutError::InvalidConfigValueError { .. } | CutError::ValidationError { .. } => {
                "Fix the reported value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CutError::PromptNotUnderstood { .. } => {
                "Could not understand prompt. Try again with clearer dimensions and terms."
                    .to_string()
            }
            CutError::MissingField { part, field } => {
                format!("Part '{}' has no {}", part, field)
            }
            CutError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}
