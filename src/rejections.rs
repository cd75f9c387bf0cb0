use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure of a request. The detail strings go to the log, never to the client.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    NotFound,
    MethodNotAllowed,
    Unprocessable(&'static str),
    Internal(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad request",
            AppError::NotFound => "Resource not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::Unprocessable(_) => "Unprocessable entity",
            AppError::Internal(_) => "Internal server error",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(detail) | AppError::Unprocessable(detail) => {
                tracing::debug!(status = self.status().as_u16(), "{detail}");
            }
            AppError::Internal(detail) => {
                tracing::error!(status = self.status().as_u16(), "{detail}");
            }
            AppError::NotFound | AppError::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Converts store errors into [`AppError`], logging the cause chain.
pub trait ResultExt<T> {
    /// Failure is the server's fault: 500.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    /// Failure on a write or input path: 422.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e:?}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e:?}");
            AppError::Unprocessable(msg)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
