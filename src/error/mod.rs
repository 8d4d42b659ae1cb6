use crate::export::ExportError;
use crate::registry::ValidationError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
