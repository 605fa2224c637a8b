use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolekeeper_core::AppError;
use serde::Serialize;
use tracing::{error, warn};
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
}

/// Failed request carrying the application error that caused it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status reported for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "role request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "role request rejected");
        }

        let body = ErrorResponse {
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result of a handler that may fail with an [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use rolekeeper_core::AppError;

    use super::ApiError;

    #[test]
    fn status_follows_error_kind() {
        let cases = [
            (AppError::Validation("bad".to_owned()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("gone".to_owned()), StatusCode::NOT_FOUND),
            (AppError::Conflict("taken".to_owned()), StatusCode::CONFLICT),
            (
                AppError::Internal("role identifiers are exhausted".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn response_uses_mapped_status() {
        let response = ApiError(AppError::NotFound("role '9' does not exist".to_owned()))
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
