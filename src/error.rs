//! Error types for the significance engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Experiment not found in configuration: {0}")]
    ExperimentNotFound(String),

    #[error("Experiment needs at least {min} variants, got {got}")]
    TooFewVariants { min: usize, got: usize },

    #[error("Variant limit reached ({0} variants max)")]
    VariantLimitReached(usize),

    #[error("Variant {0} is protected and cannot be removed")]
    ProtectedVariant(usize),

    #[error("No variant at index {0}")]
    VariantNotFound(usize),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
