//! Uniform response envelope.
//!
//! Every endpoint answers with the same wire shape:
//! `{"status": <http status>, "message": "...", "error": <bool>, "response": ...}`.
//! The HTTP status code always matches the `status` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope wrapping a serializable payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub error: bool,
    pub response: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a payload in a 200 Success envelope.
    pub fn success(response: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: "Success".to_string(),
            error: false,
            response,
        }
    }

    /// Wrap a freshly created payload in a 201 Created envelope.
    pub fn created(response: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            message: "Created".to_string(),
            error: false,
            response,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Handler result: a success envelope or an [`ApiError`](crate::error::ApiError)
/// that renders as an error envelope.
pub type ApiResult<T> = Result<Envelope<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_fields() {
        let envelope = Envelope::success(vec![1, 2, 3]);
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, "Success");
        assert!(!envelope.error);
        assert_eq!(envelope.response, vec![1, 2, 3]);
    }

    #[test]
    fn test_success_envelope_wire_shape() {
        let envelope = Envelope::success("ok");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "Success");
        assert_eq!(json["error"], false);
        assert_eq!(json["response"], "ok");
    }

    #[test]
    fn test_created_envelope_fields() {
        let envelope = Envelope::created("row");
        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.message, "Created");
        assert!(!envelope.error);
    }

    #[test]
    fn test_into_response_status() {
        let response = Envelope::success(()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = Envelope::created(()).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
