//! Platform-agnostic key events.
//!
//! The embedder translates its windowing layer's key-down notifications
//! into [`KeyEvent`] values and feeds them to
//! [`CameraRig::on_key_event`](crate::rig::CameraRig::on_key_event).
//! Held-state polling (modifiers for zoom, held zoom buttons) goes
//! through [`Host::control_held`](crate::host::Host::control_held)
//! instead — events here are strictly discrete presses.

use serde::{Deserialize, Serialize};

/// Physical key identifier.
///
/// Variant names mirror `winit::keyboard::KeyCode` naming so TOML
/// bindings read like key codes (`"KeyL"`, `"F10"`, `"ArrowUp"`). Only
/// the keys the rig can make use of are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Key {
    KeyL,
    KeyU,
    F5,
    F10,
    CapsLock,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
}

/// Modifier keys held at the time of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt key held.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Only control held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    /// Whether any modifier is held.
    #[must_use]
    pub const fn any(self) -> bool {
        self.ctrl || self.shift || self.alt
    }

    /// Whether no modifier is held.
    #[must_use]
    pub const fn none(self) -> bool {
        !self.any()
    }

    /// Whether exactly control is held (no shift, no alt).
    ///
    /// Bindings distinguish "Ctrl + key" from "Ctrl+Shift + key", so
    /// chords match on exact modifier sets, never supersets.
    #[must_use]
    pub const fn ctrl_only(self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }
}

/// A single key-down event with its modifier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that went down.
    pub key: Key,
    /// Modifiers held at press time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Event for `key` with no modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Event for `key` with only control held.
    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }
}
