use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serverless_api_core::contract::{
    PublishOrderRequest, ORDER_EVENT_SOURCE, ORDER_PLACED_DETAIL_TYPE,
};
use serverless_api_lambda::adapters::context::LambdaExecutionContext;
use serverless_api_lambda::adapters::publish::OrderEventPublisher;
use serverless_api_lambda::handlers::orders::handle_publish_order_event;
use serverless_api_lambda::handlers::response::ApiGatewayResponse;

struct AwsEventBridgePublisher {
    eventbridge_client: aws_sdk_eventbridge::Client,
    event_bus_name: Option<String>,
}

impl OrderEventPublisher for AwsEventBridgePublisher {
    fn publish_order_event(&self, detail: &[u8]) -> Result<String, String> {
        let detail_json = String::from_utf8(detail.to_vec())
            .map_err(|error| format!("order detail payload is not valid utf-8: {error}"))?;
        let client = self.eventbridge_client.clone();
        let event_bus_name = self.event_bus_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut entry = PutEventsRequestEntry::builder()
                    .source(ORDER_EVENT_SOURCE)
                    .detail_type(ORDER_PLACED_DETAIL_TYPE)
                    .detail(detail_json);
                if let Some(bus) = event_bus_name {
                    entry = entry.event_bus_name(bus);
                }

                let output = client
                    .put_events()
                    .entries(entry.build())
                    .send()
                    .await
                    .map_err(|error| format!("failed to publish order event: {error}"))?;

                if output.failed_entry_count() > 0 {
                    return Err("event bus rejected the order event".to_string());
                }

                output
                    .entries()
                    .first()
                    .and_then(|result_entry| result_entry.event_id())
                    .map(ToString::to_string)
                    .ok_or_else(|| "event bus returned no event id".to_string())
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<PublishOrderRequest>,
) -> Result<ApiGatewayResponse, Error> {
    let context = LambdaExecutionContext::from_runtime_context(&event.context)?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let publisher = AwsEventBridgePublisher {
        eventbridge_client: aws_sdk_eventbridge::Client::new(&aws_config),
        event_bus_name: std::env::var("ORDER_EVENT_BUS").ok(),
    };

    Ok(handle_publish_order_event(event.payload, &publisher, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
