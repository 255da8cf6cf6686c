use std::fmt;

#[derive(Debug)]
pub enum ZapperError {
    Config(String),
    Io(String),
    Parse(String),
    Extraction(String),
}

impl fmt::Display for ZapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZapperError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ZapperError::Io(msg) => write!(f, "I/O error: {}", msg),
            ZapperError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ZapperError::Extraction(msg) => write!(f, "Malformed comment: {}", msg),
        }
    }
}

impl std::error::Error for ZapperError {}

impl From<std::io::Error> for ZapperError {
    fn from(err: std::io::Error) -> Self {
        ZapperError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZapperError {
    fn from(err: serde_json::Error) -> Self {
        ZapperError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ZapperError {
    fn from(err: toml::de::Error) -> Self {
        ZapperError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ZapperError>;
