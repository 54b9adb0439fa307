use crate::context::ExecutionContext;
use crate::contract::{GreetingBody, HelloRequest, DEFAULT_GREETING_NAME};

/// Resolves the caller's name from the query parameters. A missing mapping
/// and a missing key both default to `"World"`; a present-but-empty value
/// is used as-is.
pub fn resolve_greeting_name(event: &HelloRequest) -> &str {
    event
        .query_string_parameters
        .as_ref()
        .and_then(|parameters| parameters.get("name"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_GREETING_NAME)
}

pub fn greeting_message(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Builds the greeting payload for one invocation. Both context values are
/// passed through untransformed.
pub fn build_greeting_body(event: &HelloRequest, context: &dyn ExecutionContext) -> GreetingBody {
    GreetingBody {
        message: greeting_message(resolve_greeting_name(event)),
        timestamp: context.remaining_time_millis(),
        request_id: context.request_id().to_string(),
    }
}
