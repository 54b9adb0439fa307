use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

pub fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

pub fn validation_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        400,
        json!({
            "error": "validation_error",
            "message": message,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_response_carries_the_json_content_type() {
        let success = success_response(200, json!({"message": "ok"}));
        let failure = error_response(500, json!({"message": "broken"}));

        assert_eq!(
            success.headers,
            json!({"Content-Type": "application/json"})
        );
        assert_eq!(success.headers, failure.headers);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let response = validation_error_response("orderId cannot be empty");

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "orderId cannot be empty");
    }

    #[test]
    fn serializes_status_code_with_the_gateway_field_name() {
        let response = success_response(200, json!({}));
        let wire: Value = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(wire["statusCode"], 200);
    }
}
