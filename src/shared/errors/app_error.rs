use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("No such customer: {0}")]
    CustomerNotFound(i32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking database task failed: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl AppError {
    /// HTTP-equivalent status for a presentation layer
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::CustomerNotFound(_) => 404,
            AppError::InvalidInput(_) | AppError::ValidationError(_) => 400,
            AppError::DatabaseError(_) => 503,
            AppError::ConfigError(_) | AppError::InternalError(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::CustomerNotFound(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
