//! Centralized rig configuration with TOML preset support.
//!
//! All tweakable settings (follow smoothing, zoom bounds and ease rates,
//! attachment steps, keybindings) are consolidated here. Options
//! serialize to/from TOML so tuned setups survive restarts; the embedder
//! decides where the file lives and when to save it.

mod attachment;
mod follower;
mod keybindings;
mod zoom;

use std::path::Path;

pub use attachment::AttachmentOptions;
pub use follower::FollowerOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Tracked-actor follow parameters.
    pub follower: FollowerOptions,
    /// Field-of-view bounds and ease rates.
    pub zoom: ZoomOptions,
    /// Attached-prop asset and nudge increments.
    pub attachment: AttachmentOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// [`RigError::Io`] if the file cannot be read,
    /// [`RigError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// [`RigError::OptionsParse`] on serialization failure,
    /// [`RigError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyAction};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts.follower, parsed.follower);
        assert_eq!(opts.zoom, parsed.zoom);
        assert_eq!(opts.attachment, parsed.attachment);
        assert_eq!(opts.keybindings.bindings, parsed.keybindings.bindings);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[zoom]
default_fov = 55.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.zoom.default_fov, 55.0);
        // Everything else should be default
        assert_eq!(opts.zoom.min_fov, 10.0);
        assert_eq!(opts.follower.compensation_factor, 0.18);
        assert_eq!(opts.attachment.rotate_step, 5.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup(Key::KeyL),
            Some(KeyAction::ToggleActor)
        );
        assert_eq!(
            opts.keybindings.lookup(Key::F10),
            Some(KeyAction::ToggleLock)
        );
        assert_eq!(opts.keybindings.lookup(Key::ArrowUp), None);
    }

    #[test]
    fn reverse_map_rebuilds_after_deserialize() {
        let toml_str = r#"
[keybindings.bindings]
toggle_actor = "KeyU"
"#;
        let mut opts: Options = toml::from_str(toml_str).unwrap();
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup(Key::KeyU),
            Some(KeyAction::ToggleActor)
        );
        assert_eq!(opts.keybindings.lookup(Key::KeyL), None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("camrig_options_test");
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.zoom.ease_in = 0.25;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.zoom.ease_in, 0.25);
        assert_eq!(
            loaded.keybindings.lookup(Key::KeyL),
            Some(KeyAction::ToggleActor)
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
