//! @acp:module "Errors"
//! @acp:summary "Error types for the qset library"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Errors produced by the qset library
#[derive(Error, Debug)]
pub enum QsetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Only type numbers into the quantity fields (got {0:?})")]
    InvalidQuantity(String),

    #[error("Please type an output path for the pdf")]
    EmptyOutputPath,

    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Generator error: {0}")]
    Generator(String),
}

/// Result type alias using [`QsetError`]
pub type Result<T> = std::result::Result<T, QsetError>;
