use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Input sampling parameters.
///
/// Rate limits decouple camera update frequency from the device's native
/// event-firing rate, which varies across hardware.
pub struct InputOptions {
    /// Minimum interval between accepted mouse samples, in milliseconds.
    /// 16 ms is one frame at 60 Hz.
    #[schemars(title = "Mouse Min Interval", range(min = 0, max = 100))]
    pub mouse_min_interval_ms: u64,
    /// Minimum interval between accepted touch samples, in milliseconds.
    /// Looser than the mouse interval: native touch-move rates are lower.
    #[schemars(title = "Touch Min Interval", range(min = 0, max = 100))]
    pub touch_min_interval_ms: u64,
}

impl InputOptions {
    /// Mouse rate-limit interval as a [`Duration`].
    #[must_use]
    pub fn mouse_min_interval(&self) -> Duration {
        Duration::from_millis(self.mouse_min_interval_ms)
    }

    /// Touch rate-limit interval as a [`Duration`].
    #[must_use]
    pub fn touch_min_interval(&self) -> Duration {
        Duration::from_millis(self.touch_min_interval_ms)
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            mouse_min_interval_ms: 16,
            touch_min_interval_ms: 32,
        }
    }
}
