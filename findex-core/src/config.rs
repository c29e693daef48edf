/// Configuration knobs for the index worker.
#[derive(Clone, Debug)]
pub struct IndexWorkerConfig {
    /// Capacity of the inbound work queue. The event source blocks once the
    /// worker falls this far behind.
    pub channel_capacity: usize,
}

impl Default for IndexWorkerConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}
