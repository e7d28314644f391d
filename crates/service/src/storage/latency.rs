use std::time::Duration;

/// Artificial delay applied to store operations, standing in for the round
/// trip of a real backend. Lists are slower than mutations, matching the
/// behavior callers were written against.
#[derive(Clone, Copy, Debug)]
pub struct StoreLatency {
    pub list: Duration,
    pub mutate: Duration,
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self { list: Duration::from_millis(500), mutate: Duration::from_millis(300) }
    }
}

impl StoreLatency {
    pub fn new(list: Duration, mutate: Duration) -> Self {
        Self { list, mutate }
    }

    pub fn from_millis(list_ms: u64, mutate_ms: u64) -> Self {
        Self::new(Duration::from_millis(list_ms), Duration::from_millis(mutate_ms))
    }

    /// Zero delay, for tests.
    pub fn off() -> Self {
        Self { list: Duration::ZERO, mutate: Duration::ZERO }
    }

    pub async fn before_list(&self) {
        if !self.list.is_zero() {
            tokio::time::sleep(self.list).await;
        }
    }

    pub async fn before_mutate(&self) {
        if !self.mutate.is_zero() {
            tokio::time::sleep(self.mutate).await;
        }
    }
}
