use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::a002_pim_product::PimError;

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database or PIM unreachable / rejected our credentials
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        ApiError::Unavailable(format!("Campaign data unavailable: {}", e))
    }
}

impl From<PimError> for ApiError {
    fn from(e: PimError) -> Self {
        ApiError::Unavailable(format!("Product catalog unavailable: {}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let db: ApiError = sea_orm::DbErr::Custom("connection refused".into()).into();
        assert_eq!(db.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(db.to_string().contains("connection refused"));

        let pim: ApiError = PimError::Auth("401 Unauthorized".into()).into();
        assert_eq!(pim.status(), StatusCode::SERVICE_UNAVAILABLE);

        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }
}
