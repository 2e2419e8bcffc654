use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::{Key, KeyAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to keys.
pub struct KeybindingOptions {
    /// Maps action → key (e.g. `ToggleActor` → `KeyL`).
    pub bindings: FxHashMap<KeyAction, Key>,
    /// Reverse lookup cache (key → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<Key, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = FxHashMap::from_iter([
            (KeyAction::ToggleActor, Key::KeyL),
            (KeyAction::ToggleLock, Key::F10),
            (KeyAction::ToggleVisibility, Key::F5),
            (KeyAction::ToggleAttachment, Key::CapsLock),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key → action).
    ///
    /// Must be called after deserializing or editing `bindings`.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(*key, *action);
        }
    }

    /// Look up the action bound to a key.
    #[must_use]
    pub fn lookup(&self, key: Key) -> Option<KeyAction> {
        self.key_to_action.get(&key).copied()
    }

    /// The key an action is bound to, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<Key> {
        self.bindings.get(&action).copied()
    }
}
