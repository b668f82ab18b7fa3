use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Load Animation", inline)]
#[serde(default)]
/// Timing of the one-time entry animation played once fonts are ready.
pub struct LoadOptions {
    /// Duration of every entry animation in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000))]
    pub duration_ms: u64,
    /// Delay before the pentagon logo starts, in milliseconds.
    #[schemars(title = "Pentagon Delay (ms)", range(min = 0, max = 5000))]
    pub pentagon_delay_ms: u64,
}

impl LoadOptions {
    /// Entry animation duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Pentagon entry delay.
    #[must_use]
    pub fn pentagon_delay(&self) -> Duration {
        Duration::from_millis(self.pentagon_delay_ms)
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            duration_ms: 700,
            pentagon_delay_ms: 150,
        }
    }
}
