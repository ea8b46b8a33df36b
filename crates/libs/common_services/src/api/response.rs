use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Uniform response envelope. Every endpoint, success or failure,
/// returns this shape.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_success: true,
            code: "200".to_owned(),
            message: "Request succeeded.".to_owned(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok_empty() -> Self {
        Self {
            is_success: true,
            code: "200".to_owned(),
            message: "Request succeeded.".to_owned(),
            data: None,
        }
    }

    pub fn failure(code: &str, message: &str) -> Self {
        Self {
            is_success: false,
            code: code.to_owned(),
            message: message.to_owned(),
            data: None,
        }
    }
}

/// Builds a failure response with the given HTTP status and wire code.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(ApiResponse::failure(code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::ok(json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["isSuccess"], json!(true));
        assert_eq!(value["code"], json!("200"));
        assert_eq!(value["data"]["id"], json!(1));
    }

    #[test]
    fn failure_envelope_has_null_data() {
        let response = ApiResponse::failure("POST_NOT_FOUND", "Post not found.");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["isSuccess"], json!(false));
        assert_eq!(value["code"], json!("POST_NOT_FOUND"));
        assert!(value["data"].is_null());
    }
}
