use lambda_runtime::{service_fn, Error, LambdaEvent};
use serverless_api_core::contract::HelloRequest;
use serverless_api_lambda::adapters::context::LambdaExecutionContext;
use serverless_api_lambda::handlers::hello::handle_hello_event;
use serverless_api_lambda::handlers::response::ApiGatewayResponse;

async fn handle_request(event: LambdaEvent<HelloRequest>) -> Result<ApiGatewayResponse, Error> {
    let context = LambdaExecutionContext::from_runtime_context(&event.context)?;
    Ok(handle_hello_event(event.payload, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
