use std::time::Duration;

/// Source of delays for the demo send and the cooldown ticks.
///
/// The widget uses [`TokioSleeper`]; tests swap in a recorder so no real
/// time passes.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the Tokio timer driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
