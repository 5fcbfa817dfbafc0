use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Value does not have the `DD/MM/YYYY` shape.
    #[error("invalid schedule date '{0}' (expected DD/MM/YYYY)")]
    InvalidDate(String),
    /// Value does not reorder into a `DD/MM/YYYY` date.
    #[error("invalid ISO date '{0}' (expected YYYY-MM-DD)")]
    InvalidIsoDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
