//! Uniform success/error response envelope.
//!
//! Every service operation resolves to a [`PortalResponse`]: either a payload
//! under a `response` field or an [`ApiError`] under an `error` field, never
//! both. The two states are a tagged union, so a body with both (or neither)
//! field cannot be constructed.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Machine-readable error codes carried in the envelope.
pub mod codes {
    pub const STUDENT_NOT_FOUND: &str = "STD_NOT_FOUND";
    pub const STUDENT_REGISTER: &str = "ERR_STUDENT_REGISTER";
    pub const INTERNAL: &str = "INTERNAL_SERVER_ERROR";
}

/// Error payload: a human-readable message plus a short machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_message: String,
    pub error_code: String,
}

/// Result of a service operation, carried back to the client unchanged.
#[derive(Debug)]
pub enum PortalResponse<T> {
    Success(T),
    Failure(StatusCode, ApiError),
}

impl<T> PortalResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn error(status: StatusCode, message: impl Into<String>, code: &str) -> Self {
        Self::Failure(
            status,
            ApiError {
                error_message: message.into(),
                error_code: code.to_string(),
            },
        )
    }
}

/// Wire shape. Externally tagged, so the body serializes to
/// `{"response": ...}` or `{"error": {...}}`.
#[derive(Serialize)]
enum Envelope<'a, T> {
    #[serde(rename = "response")]
    Response(&'a T),
    #[serde(rename = "error")]
    Error(&'a ApiError),
}

impl<T: Serialize> Serialize for PortalResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Success(data) => Envelope::Response(data).serialize(serializer),
            Self::Failure(_, error) => Envelope::<T>::Error(error).serialize(serializer),
        }
    }
}

impl<T: Serialize> IntoResponse for PortalResponse<T> {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Success(_) => StatusCode::OK,
            Self::Failure(status, _) => *status,
        };
        (status, Json(&self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn success_serializes_under_response_key() {
        let envelope = PortalResponse::success(json!({"id": 7}));
        let value: Value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"response": {"id": 7}}));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_serializes_under_error_key() {
        let envelope: PortalResponse<Value> = PortalResponse::error(
            StatusCode::NOT_FOUND,
            "Student not found",
            codes::STUDENT_NOT_FOUND,
        );
        let value: Value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"error": {"errorMessage": "Student not found", "errorCode": "STD_NOT_FOUND"}})
        );
        assert!(value.get("response").is_none());
    }

    #[test]
    fn success_maps_to_http_200() {
        let response = PortalResponse::success("ok").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn failure_keeps_its_status() {
        let response: Response = PortalResponse::<String>::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom",
            codes::INTERNAL,
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
