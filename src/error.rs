use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Handler failures. Several causes share one client-facing message, so
/// match on the variant rather than the text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing {0} query parameter")]
    MissingParameter(&'static str),
    #[error("Invalid {0} query parameter")]
    InvalidParameter(&'static str),
    // GET /fishing-result keeps its own wording
    #[error("result not found.")]
    LookupMiss,
    #[error("Result not found")]
    ResultNotFound,
    #[error("Invalid key query parameter")]
    UnknownSpecies(i64),
    #[error("Invalid key query parameter")]
    CatchNotFound(String),
    #[error("Result not available")]
    NotAvailable,
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::LookupMiss | ApiError::ResultNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingParameter(_)
            | ApiError::InvalidParameter(_)
            | ApiError::UnknownSpecies(_)
            | ApiError::CatchNotFound(_)
            | ApiError::NotAvailable
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, cause = ?self, "request rejected");

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RecordNotFound(_) => ApiError::ResultNotFound,
            StoreError::CatchNotFound { fish_name, .. } => ApiError::CatchNotFound(fish_name),
            StoreError::NotAvailable { .. } => ApiError::NotAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_causes_share_the_key_message() {
        let unknown = ApiError::UnknownSpecies(9);
        let missing = ApiError::CatchNotFound("サバ".to_string());
        let unparsable = ApiError::InvalidParameter("key");

        assert_eq!(unknown.to_string(), "Invalid key query parameter");
        assert_eq!(missing.to_string(), "Invalid key query parameter");
        assert_eq!(unparsable.to_string(), "Invalid key query parameter");
        assert_ne!(unknown, missing);
    }

    #[test]
    fn maps_statuses() {
        assert_eq!(ApiError::LookupMiss.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ResultNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotAvailable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingParameter("id").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MalformedBody("eof".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn store_errors_convert() {
        assert_eq!(
            ApiError::from(StoreError::RecordNotFound("7".to_string())),
            ApiError::ResultNotFound
        );
        assert_eq!(
            ApiError::from(StoreError::CatchNotFound {
                id: "1".to_string(),
                fish_name: "サバ".to_string(),
            }),
            ApiError::CatchNotFound("サバ".to_string())
        );
        assert_eq!(
            ApiError::from(StoreError::NotAvailable {
                id: "3".to_string(),
                fish_name: "マダイ".to_string(),
            }),
            ApiError::NotAvailable
        );
    }
}
