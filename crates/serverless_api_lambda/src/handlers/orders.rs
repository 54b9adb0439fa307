use rand::Rng;
use serde_json::json;
use serverless_api_core::context::ExecutionContext;
use serverless_api_core::contract::{stable_contract_json, OrderPlacedEvent, PublishOrderRequest};
use serverless_api_core::orders::{build_order_detail, validate_order_detail};

use crate::adapters::publish::OrderEventPublisher;
use crate::handlers::response::{
    error_response, success_response, validation_error_response, ApiGatewayResponse,
};

/// Acknowledges an `order_placed` event delivered by the bus. The order is
/// only logged; nothing outlives the invocation.
pub fn handle_order_placed_event(
    event: OrderPlacedEvent,
    context: &dyn ExecutionContext,
) -> ApiGatewayResponse {
    if let Err(error) = validate_order_detail(&event.detail) {
        log_order_error(
            "order_rejected",
            json!({
                "request_id": context.request_id(),
                "error": error.message(),
            }),
        );
        return validation_error_response(error.message());
    }

    log_order_info(
        "order_received",
        json!({
            "request_id": context.request_id(),
            "order_id": event.detail.order_id,
            "source": event.source,
        }),
    );

    log_order_info(
        "order_processed",
        json!({
            "request_id": context.request_id(),
            "order_id": event.detail.order_id,
        }),
    );

    success_response(200, json!({"message": "Order processed successfully"}))
}

/// Builds an order detail from the publish request, defaulting the id,
/// customer, items, and timestamp, and hands the serialized detail to the
/// publisher seam.
pub fn handle_publish_order_event(
    request: PublishOrderRequest,
    publisher: &dyn OrderEventPublisher,
    context: &dyn ExecutionContext,
) -> ApiGatewayResponse {
    let fallback_order_id = format!("ORDER-{}", rand::thread_rng().gen_range(0..10_000));
    let event_time = chrono::Utc::now().to_rfc3339();
    let detail = build_order_detail(request, &fallback_order_id, &event_time);

    let payload = stable_contract_json(&detail);
    match publisher.publish_order_event(payload.as_bytes()) {
        Ok(event_id) => {
            log_order_info(
                "order_published",
                json!({
                    "request_id": context.request_id(),
                    "order_id": detail.order_id,
                    "event_id": event_id,
                }),
            );
            success_response(
                200,
                json!({"message": "Event published", "eventId": event_id}),
            )
        }
        Err(error) => {
            log_order_error(
                "publish_failed",
                json!({
                    "request_id": context.request_id(),
                    "order_id": detail.order_id,
                    "error": error,
                }),
            );
            error_response(
                500,
                json!({"message": "Error publishing event", "error": error}),
            )
        }
    }
}

fn log_order_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "order_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_order_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "order_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
