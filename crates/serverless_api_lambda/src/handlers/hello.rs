use serde_json::json;
use serverless_api_core::context::ExecutionContext;
use serverless_api_core::contract::HelloRequest;
use serverless_api_core::greeting::build_greeting_body;

use crate::handlers::response::{success_response, ApiGatewayResponse};

/// Greets the caller by name. Pure given its inputs: the only values read
/// beyond the event are the two context capabilities, both passed through
/// into the body untransformed.
pub fn handle_hello_event(
    event: HelloRequest,
    context: &dyn ExecutionContext,
) -> ApiGatewayResponse {
    log_hello_info(
        "request_received",
        json!({
            "request_id": context.request_id(),
        }),
    );

    let body = build_greeting_body(&event, context);
    let response = success_response(200, &body);

    log_hello_info(
        "request_completed",
        json!({
            "request_id": body.request_id,
            "message": body.message,
        }),
    );

    response
}

fn log_hello_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "hello_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::Value;
    use serverless_api_core::context::StaticContext;

    use super::*;

    fn test_context() -> StaticContext {
        StaticContext {
            remaining_time_millis: 10_000,
            request_id: "test-request-id".to_string(),
        }
    }

    fn parse_body(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("body should parse")
    }

    #[test]
    fn defaults_to_world_when_parameters_are_null() {
        let event = HelloRequest {
            query_string_parameters: None,
        };

        let response = handle_hello_event(event, &test_context());

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers,
            json!({"Content-Type": "application/json"})
        );
        let body = parse_body(&response);
        assert_eq!(body["message"], "Hello, World!");
        assert_eq!(body["timestamp"], 10_000);
        assert_eq!(body["request_id"], "test-request-id");
    }

    #[test]
    fn greets_the_named_caller() {
        let event = HelloRequest {
            query_string_parameters: Some(BTreeMap::from([(
                "name".to_string(),
                "Alice".to_string(),
            )])),
        };

        let response = handle_hello_event(event, &test_context());

        assert_eq!(response.status_code, 200);
        assert_eq!(parse_body(&response)["message"], "Hello, Alice!");
    }

    #[test]
    fn an_empty_parameter_mapping_still_defaults() {
        let event = HelloRequest {
            query_string_parameters: Some(BTreeMap::new()),
        };

        let response = handle_hello_event(event, &test_context());

        assert_eq!(parse_body(&response)["message"], "Hello, World!");
    }

    #[test]
    fn a_present_but_empty_name_is_not_defaulted() {
        let event = HelloRequest {
            query_string_parameters: Some(BTreeMap::from([(
                "name".to_string(),
                String::new(),
            )])),
        };

        let response = handle_hello_event(event, &test_context());

        assert_eq!(parse_body(&response)["message"], "Hello, !");
    }

    #[test]
    fn body_contains_exactly_the_documented_keys() {
        let response = handle_hello_event(
            HelloRequest {
                query_string_parameters: None,
            },
            &test_context(),
        );

        let body = parse_body(&response);
        let object = body.as_object().expect("body should be an object");
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("message"));
        assert!(object.contains_key("timestamp"));
        assert!(object.contains_key("request_id"));
    }

    #[test]
    fn passes_context_values_through_untouched() {
        let context = StaticContext {
            remaining_time_millis: 1,
            request_id: "another-request".to_string(),
        };

        let response = handle_hello_event(
            HelloRequest {
                query_string_parameters: None,
            },
            &context,
        );

        let body = parse_body(&response);
        assert_eq!(body["timestamp"], 1);
        assert_eq!(body["request_id"], "another-request");
    }
}
