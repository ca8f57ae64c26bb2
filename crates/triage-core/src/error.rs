use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid column label: {0:?}")]
    InvalidColumn(String),
}
