use std::time::Duration;

use crate::timer::Sleeper;

/// Seconds during which resubmission is disabled after a successful send.
pub const COOLDOWN_SECS: u32 = 8;

/// Interval between cooldown ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// Remaining whole seconds of the resubmission window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn start(&mut self, secs: u32) {
        self.remaining = secs;
    }

    /// Count down one second and return what is left. Never goes below zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}

/// Drive a cooldown to zero, calling `tick` once per [`TICK`].
///
/// Returns as soon as `tick` reports zero, so no background tick outlives
/// the window. Dropping the future stops it early.
pub async fn run_cooldown<S: Sleeper>(sleeper: &S, mut tick: impl FnMut() -> u32) {
    loop {
        sleeper.sleep(TICK).await;
        if tick() == 0 {
            break;
        }
    }
}
