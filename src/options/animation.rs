use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing shared by every attribute animation.
pub struct AnimationOptions {
    /// Duration of one attribute transition in milliseconds. Zero disables
    /// easing (targets settle on the next frame).
    #[schemars(title = "Duration (ms)", range(min = 0, max = 2000))]
    pub duration_ms: u64,
    /// Easing curve applied to every attribute.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Transition duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            easing: EasingFunction::DEFAULT,
        }
    }
}
