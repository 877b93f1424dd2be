use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// API failure rendered as `{"error": {"message": ..., "status": ...}}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            // Display carries "Invalid company: <code>"
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(m) => Self::new(StatusCode::BAD_REQUEST, m.to_string()),
            ServiceError::Db(msg) => {
                // Infrastructure detail stays in the logs, not the response
                error!(err = %msg, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_code_in_message() {
        let err: ApiError = ServiceError::invalid_company("acme").into();
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res).await;
        assert_eq!(json["error"]["message"], "Invalid company: acme");
        assert_eq!(json["error"]["status"], 404);
    }

    #[tokio::test]
    async fn db_failure_maps_to_generic_500() {
        let err: ApiError = ServiceError::Db("connection reset by peer".into()).into();
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["error"]["message"], "Internal Server Error");
        assert_eq!(json["error"]["status"], 500);
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let err: ApiError = ServiceError::Conflict("company already exists: acme".into()).into();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }
}
