use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::FooterLimits;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Footer sizing limits used by the constraint resolver.
pub struct LayoutOptions {
    /// Smallest footer height that is still worth showing.
    #[schemars(title = "Minimum Footer Height", range(min = 0.0))]
    pub min_footer_size: f64,
    /// Largest height a user may drag the footer to.
    #[schemars(title = "Maximum Footer Height", range(min = 0.0))]
    pub max_footer_size: f64,
    /// Footer height used before the user has resized it.
    #[schemars(title = "Default Footer Height", range(min = 0.0))]
    pub default_footer_height: f64,
}

impl LayoutOptions {
    /// Limits applied to user footer drags and to the resolver's minimum.
    #[must_use]
    pub fn footer_limits(&self) -> FooterLimits {
        FooterLimits::new(self.min_footer_size, self.max_footer_size)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_footer_size: 264.0,
            max_footer_size: 400.0,
            default_footer_height: 300.0,
        }
    }
}
