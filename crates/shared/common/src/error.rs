//! Error type shared by the web surface and the RPC facade.
//!
//! Handlers show [`AppError::user_message`] next to the form or list that
//! failed; only authorization failures leave the page flow, as a bare 403.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    /// Name or username already taken; carries the user-facing message
    #[error("{0}")]
    Conflict(String),

    /// Field rule violation; carries the user-facing message
    #[error("{0}")]
    Validation(String),

    /// Unparsable request parameter
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "cache")]
    #[error("Session store error")]
    Cache(#[from] redis::RedisError),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user. Store failures are logged here and
    /// replaced by a generic text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            #[cfg(feature = "cache")]
            AppError::Cache(e) => {
                tracing::error!("Session store error: {:?}", e);
                "A session store error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Forbidden | AppError::NotFound => self.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Plain-text error page.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.user_message();

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::Forbidden => tonic::Code::PermissionDenied,
            AppError::NotFound => tonic::Code::NotFound,
            AppError::Conflict(_) => tonic::Code::AlreadyExists,
            AppError::Validation(_) | AppError::BadRequest(_) => tonic::Code::InvalidArgument,
            _ => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_violations_keep_their_message() {
        let err = AppError::from(DomainError::validation("The zone name is required."));
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "The zone name is required."));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = AppError::conflict("taken");
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(Status::from(err).code(), tonic::Code::AlreadyExists);
    }

    #[test]
    fn user_message_hides_internal_details() {
        assert_eq!(
            AppError::internal("pool exhausted").user_message(),
            "An internal error occurred"
        );
        assert_eq!(
            AppError::validation("The area must be greater than zero.").user_message(),
            "The area must be greater than zero."
        );
        assert_eq!(AppError::bad_request("Invalid id: x").user_message(), "Invalid id: x");
    }

    #[test]
    fn forbidden_is_a_bare_denial() {
        let status = Status::from(AppError::Forbidden);
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn not_found_maps_to_grpc_not_found() {
        assert_eq!(Status::from(AppError::NotFound).code(), tonic::Code::NotFound);
    }
}
