use crate::contract::{
    OrderDetail, OrderItem, PublishOrderRequest, ValidationError, DEFAULT_ORDER_CUSTOMER,
    ORDER_STATUS_PLACED,
};

/// Fills in the demo defaults for a publish request. The caller supplies the
/// generated fallback id and the event timestamp, keeping this module
/// deterministic. Blank ids and customers fall back to the defaults; an
/// explicitly empty items list is kept.
pub fn build_order_detail(
    request: PublishOrderRequest,
    fallback_order_id: &str,
    event_time: &str,
) -> OrderDetail {
    OrderDetail {
        order_id: request
            .order_id
            .filter(|order_id| !order_id.is_empty())
            .unwrap_or_else(|| fallback_order_id.to_string()),
        status: ORDER_STATUS_PLACED.to_string(),
        customer: request
            .customer
            .filter(|customer| !customer.is_empty())
            .unwrap_or_else(|| DEFAULT_ORDER_CUSTOMER.to_string()),
        items: request.items.unwrap_or_else(default_order_items),
        timestamp: event_time.to_string(),
    }
}

pub fn validate_order_detail(detail: &OrderDetail) -> Result<(), ValidationError> {
    if detail.order_id.trim().is_empty() {
        return Err(ValidationError::new("orderId cannot be empty"));
    }
    Ok(())
}

fn default_order_items() -> Vec<OrderItem> {
    vec![OrderItem {
        id: "item-1".to_string(),
        quantity: 1,
    }]
}
