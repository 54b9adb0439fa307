use std::time::{SystemTime, UNIX_EPOCH};

use lambda_runtime::Context;
use serverless_api_core::context::ExecutionContext;
use serverless_api_core::contract::PreconditionError;

/// Production [`ExecutionContext`] backed by the Lambda runtime context.
/// The remaining time budget is derived from the invocation deadline on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaExecutionContext {
    request_id: String,
    deadline_epoch_ms: i64,
}

impl LambdaExecutionContext {
    /// Validates the runtime-supplied context. A missing request id or
    /// deadline is a contract violation by the invoking layer and fails
    /// with a [`PreconditionError`].
    pub fn from_runtime_context(context: &Context) -> Result<Self, PreconditionError> {
        if context.request_id.trim().is_empty() {
            return Err(PreconditionError::new(
                "invocation context is missing a request id",
            ));
        }
        if context.deadline == 0 {
            return Err(PreconditionError::new(
                "invocation context is missing a deadline",
            ));
        }

        Ok(Self {
            request_id: context.request_id.clone(),
            deadline_epoch_ms: context.deadline as i64,
        })
    }
}

impl ExecutionContext for LambdaExecutionContext {
    fn remaining_time_millis(&self) -> i64 {
        let now_epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        (self.deadline_epoch_ms - now_epoch_ms).max(0)
    }

    fn request_id(&self) -> &str {
        &self.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime_context(request_id: &str, deadline: u64) -> Context {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        context.deadline = deadline;
        context
    }

    fn epoch_ms_now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be past the epoch")
            .as_millis() as u64
    }

    #[test]
    fn rejects_a_context_without_a_request_id() {
        let error = LambdaExecutionContext::from_runtime_context(&runtime_context("", 1))
            .expect_err("context should fail");

        assert_eq!(error.message(), "invocation context is missing a request id");
    }

    #[test]
    fn rejects_a_context_without_a_deadline() {
        let error = LambdaExecutionContext::from_runtime_context(&runtime_context("req-1", 0))
            .expect_err("context should fail");

        assert_eq!(error.message(), "invocation context is missing a deadline");
    }

    #[test]
    fn exposes_the_runtime_request_id() {
        let context =
            LambdaExecutionContext::from_runtime_context(&runtime_context("req-1", epoch_ms_now()))
                .expect("context should pass");

        assert_eq!(context.request_id(), "req-1");
    }

    #[test]
    fn future_deadline_yields_a_positive_budget() {
        let deadline = epoch_ms_now() + 60_000;
        let context =
            LambdaExecutionContext::from_runtime_context(&runtime_context("req-1", deadline))
                .expect("context should pass");

        let remaining = context.remaining_time_millis();
        assert!(remaining > 0);
        assert!(remaining <= 60_000);
    }

    #[test]
    fn expired_deadline_floors_at_zero() {
        let context = LambdaExecutionContext::from_runtime_context(&runtime_context("req-1", 1))
            .expect("context should pass");

        assert_eq!(context.remaining_time_millis(), 0);
    }
}
