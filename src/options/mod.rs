//! Centralized layout and animation options with TOML preset support.
//!
//! All tweakable settings (animation timing, footer limits, load animation,
//! stats panes) are consolidated here. Options serialize to/from TOML so a
//! host can ship presets or let users override single sections.

mod animation;
mod layout;
mod load;
mod stats;

use std::path::Path;

pub use animation::AnimationOptions;
pub use layout::LayoutOptions;
pub use load::LoadOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use stats::{PaneOptions, StatsOptions};

use crate::error::ViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Attribute animation timing.
    pub animation: AnimationOptions,
    /// Footer sizing limits.
    pub layout: LayoutOptions,
    /// First-load entry animation timing.
    pub load: LoadOptions,
    /// Stats footer pane widths.
    pub panes: PaneOptions,
    /// Empty-state puzzle card proportions.
    pub stats: StatsOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewError> {
        toml::from_str(content)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path).map_err(ViewError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[layout]
max_footer_size = 480.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.layout.max_footer_size, 480.0);
        // Everything else should be default
        assert_eq!(opts.layout.min_footer_size, 264.0);
        assert_eq!(opts.animation.duration_ms, 400);
        assert_eq!(opts.panes.min_graph_width, 300.0);
    }

    #[test]
    fn easing_is_configurable() {
        let toml_str = r#"
[animation]
duration_ms = 250
easing = { kind = "linear" }
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.duration_ms, 250);
        assert_eq!(opts.animation.easing, EasingFunction::Linear);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[layout\nmin_footer_size = ").unwrap_err();
        assert!(matches!(err, ViewError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("cubeview-options-{}", std::process::id()));
        let path = dir.join("compact.toml");
        let mut opts = Options::default();
        opts.layout.default_footer_height = 280.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["compact".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("animation"));
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("load"));
        assert!(props.contains_key("panes"));
        assert!(props.contains_key("stats"));

        // The easing curve is not exposed to settings UIs.
        let animation = &props["animation"]["properties"];
        assert!(animation.get("duration_ms").is_some());
        assert!(animation.get("easing").is_none());
    }
}
