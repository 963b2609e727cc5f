use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::error::{Error, ExtractionError};

/// API错误类型
pub struct AppError(pub Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Extraction(ExtractionError::NoFace(_) | ExtractionError::Invalid(_))
            | Error::NonFinite { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Extraction(ExtractionError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
            Error::DimensionMismatch { .. } | Error::InvalidThreshold(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("请求失败: {}", self.0);
        }
        (status, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
