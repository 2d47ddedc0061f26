use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error at {}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input; nothing was written.
    High,
    /// The filesystem refused a write; earlier files may already exist.
    Critical,
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError { .. } | Self::SerializationError(_) => ErrorSeverity::Critical,
            Self::TomlError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { .. } => {
                "Check that the output directory exists and is writable, and that the disk is not full"
            }
            Self::SerializationError(_) => "Check that the report path is writable",
            Self::TomlError(_) => "Fix the syntax of the asset plan file",
            Self::InvalidConfigValueError { .. } => {
                "Correct the offending value in the asset plan or command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
