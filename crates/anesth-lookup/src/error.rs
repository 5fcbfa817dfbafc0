use anesth_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// A random-fallback policy needs at least one name to draw from.
    #[error("fallback roster is empty")]
    EmptyRoster,
    #[error(transparent)]
    Date(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, LookupError>;
