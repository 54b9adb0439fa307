use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING_NAME: &str = "World";

pub const ORDER_EVENT_SOURCE: &str = "custom.myapp";
pub const ORDER_PLACED_DETAIL_TYPE: &str = "order_placed";
pub const ORDER_STATUS_PLACED: &str = "PLACED";
pub const DEFAULT_ORDER_CUSTOMER: &str = "test-customer";

pub type QueryParameters = BTreeMap<String, String>;

/// HTTP-style request event delivered by the gateway. A missing
/// `queryStringParameters` field and an explicit `null` both deserialize to
/// `None` and are treated as an empty mapping downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloRequest {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<QueryParameters>,
}

/// Serialized greeting payload: exactly these three keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingBody {
    pub message: String,
    pub timestamp: i64,
    pub request_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetail {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub status: String,
    pub customer: String,
    pub items: Vec<OrderItem>,
    pub timestamp: String,
}

/// EventBridge-style envelope for `order_placed` events. The processor only
/// reads `detail`; the remaining fields are kept for log context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPlacedEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "detail-type", default)]
    pub detail_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub detail: OrderDetail,
}

/// Publish request accepted by the event publisher. Every field is optional
/// and defaulted at publish time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishOrderRequest {
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Contract violation by the invoking layer: the execution context does not
/// supply the values every invocation is entitled to. Propagates to the
/// caller uncaught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError {
    message: String,
}

impl PreconditionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PreconditionError {}

pub fn stable_contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}
