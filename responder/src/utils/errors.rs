use std::path::PathBuf;

#[derive(Debug)]
pub enum ResponseError {
    MissingDataset(PathBuf),
    EmptyDataset(PathBuf),
    InvalidReading(String),
    EmptyZoneRegistry,
    InvalidConfig(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for ResponseError {
    fn from(err: std::io::Error) -> Self {
        ResponseError::IoError(err)
    }
}

impl From<csv::Error> for ResponseError {
    fn from(err: csv::Error) -> Self {
        ResponseError::CsvError(err)
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::JsonError(err)
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseError::MissingDataset(p) => write!(f, "Dataset not found: {}", p.display()),
            ResponseError::EmptyDataset(p) => write!(f, "Dataset contains no records: {}", p.display()),
            ResponseError::InvalidReading(s) => write!(f, "Invalid sensor reading: {}", s),
            ResponseError::EmptyZoneRegistry => write!(f, "Safe zone registry is empty; no evacuation destination can be scored"),
            ResponseError::InvalidConfig(s) => write!(f, "Invalid configuration: {}", s),
            ResponseError::IoError(e) => write!(f, "IO error: {}", e),
            ResponseError::CsvError(e) => write!(f, "CSV error: {}", e),
            ResponseError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseError::IoError(e) => Some(e),
            ResponseError::CsvError(e) => Some(e),
            ResponseError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResponseError>;
