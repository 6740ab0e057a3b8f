use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Path identifier is not a well-formed object id
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Identifier is well-formed but nothing is stored under it
    #[error("Not found: {0}")]
    NotFound(String),

    /// A date query parameter is not `YYYY-MM-DD`
    #[error("{field} must be in YYYY-MM-DD format")]
    InvalidDateFormat { field: String },

    /// Query string could not be decoded
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        AppError::InvalidIdentifier(id.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn invalid_date_format(field: impl Into<String>) -> Self {
        AppError::InvalidDateFormat {
            field: field.into(),
        }
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        AppError::InvalidQuery(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for failures caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Short label placed in the `error` field of the response body.
    /// Unexpected failures use `context`, which names the operation that failed.
    pub fn label(&self, context: &str) -> String {
        match self {
            AppError::InvalidIdentifier(_) => "Invalid identifier".to_string(),
            AppError::NotFound(_) => "Quotation not found".to_string(),
            AppError::InvalidDateFormat { .. } => "Invalid date format".to_string(),
            AppError::InvalidQuery(_) => "Invalid query parameters".to_string(),
            _ => context.to_string(),
        }
    }

    /// Human-readable message for the `message` field
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidIdentifier(id) => {
                format!("'{}' is not a valid quotation identifier", id)
            }
            AppError::NotFound(id) => format!("No quotation exists with id: {}", id),
            other => other.to_string(),
        }
    }

    /// Builds the error envelope. The debug chain is attached to server errors
    /// only when `expose_detail` is set.
    pub fn to_body(&self, context: &str, expose_detail: bool) -> ErrorBody {
        let detail = if expose_detail && self.status_code().is_server_error() {
            Some(format!("{:#?}", self))
        } else {
            None
        };

        ErrorBody {
            error: self.label(context),
            message: self.message(),
            detail,
        }
    }

    pub fn to_response(&self, context: &str, expose_detail: bool) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body(context, expose_detail))
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_response("Unexpected error", false)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidDateFormat { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
