/// Capability object supplying invocation metadata to a single call: the
/// remaining time budget in milliseconds and the unique request identifier.
/// Production code adapts the Lambda runtime context; tests supply fixed
/// values.
pub trait ExecutionContext {
    fn remaining_time_millis(&self) -> i64;

    fn request_id(&self) -> &str;
}

/// Fixed-value context for tests.
#[cfg(feature = "test-helpers")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContext {
    pub remaining_time_millis: i64,
    pub request_id: String,
}

#[cfg(feature = "test-helpers")]
impl ExecutionContext for StaticContext {
    fn remaining_time_millis(&self) -> i64 {
        self.remaining_time_millis
    }

    fn request_id(&self) -> &str {
        &self.request_id
    }
}
