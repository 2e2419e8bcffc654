//! Input handling: key event types, the action vocabulary bindings refer
//! to, and the router that turns one key-down event into at most one
//! rig command.

pub mod event;
pub mod router;

use serde::{Deserialize, Serialize};

pub use event::{Key, KeyEvent, Modifiers};
pub use router::{InputRouter, RouteContext};

/// Rig-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_actor = "KeyL"
/// toggle_lock = "F10"
/// ```
///
/// The modifier-qualified variants (save = Ctrl + lock key, zoom-mode
/// toggle = Ctrl + attachment key) are fixed chords over these bindings,
/// not separately bindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum KeyAction {
    ToggleActor,
    ToggleLock,
    ToggleVisibility,
    ToggleAttachment,
}
