//! Error types for catalog lookups, request validation and data loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvestError {
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Invalid financing: {0}")]
    InvalidFinancing(String),

    #[error("Assumptions error: {0}")]
    Assumptions(String),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvestError>;
