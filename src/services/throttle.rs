//! Request pacing.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Pause inserted after each retained item.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Flat delay between items.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No pacing at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Throttle for NoDelay {
    async fn pause(&self) {}
}

/// Throttle for a configured delay in milliseconds; zero disables pacing.
pub fn from_delay_ms(delay_ms: u64) -> Arc<dyn Throttle> {
    if delay_ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(delay_ms)))
    }
}
