pub trait OrderEventPublisher {
    /// Publishes one serialized `order_placed` detail and returns the
    /// bus-assigned event id.
    fn publish_order_event(&self, detail: &[u8]) -> Result<String, String>;
}
