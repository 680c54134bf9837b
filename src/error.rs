use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid date text: {0}")]
    DateParse(String),

    #[error("Invalid amount text: {0}")]
    AmountParse(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
