use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum OrgnoteError {
    #[error("Codec error: {0}")]
    Codec(String),
    #[error("File system error: {0}")]
    Io(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("You do not have permission to access this resource")]
    PermissionDenied,
    #[error("(De)serialization error: {0}")]
    Serialization(String),
}

impl From<io::Error> for OrgnoteError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => OrgnoteError::NotFound(format!("{x}")),
            io::ErrorKind::PermissionDenied => OrgnoteError::PermissionDenied,
            _ => OrgnoteError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

impl From<toml::de::Error> for OrgnoteError {
    fn from(src: toml::de::Error) -> OrgnoteError {
        OrgnoteError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for OrgnoteError {
    fn from(src: toml::ser::Error) -> OrgnoteError {
        OrgnoteError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for OrgnoteError {
    fn from(src: JsonError) -> OrgnoteError {
        OrgnoteError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<walkdir::Error> for OrgnoteError {
    fn from(x: walkdir::Error) -> Self {
        match x.io_error().map(io::Error::kind) {
            Some(io::ErrorKind::NotFound) => OrgnoteError::NotFound(format!("{x}")),
            Some(io::ErrorKind::PermissionDenied) => OrgnoteError::PermissionDenied,
            _ => OrgnoteError::Io(format!("Directory walk error: {x}")),
        }
    }
}
