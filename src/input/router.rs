//! Converts key-down events into rig commands.
//!
//! Each event is classified by `(key, modifiers)` into exactly one
//! [`RigCommand`] from a fixed, priority-ordered table, or into nothing.
//! The offset nudges live in a separate branch at the bottom, reachable
//! only while the lock is off and the attachment is visible and
//! spawned — so they can never shadow (or be shadowed by) the main
//! table, even if a nudge key is rebound onto a table key.

use super::event::KeyEvent;
use super::KeyAction;
use crate::command::{OffsetAxis, RigCommand, StepDirection};
use crate::input::Key;
use crate::options::KeybindingOptions;

/// Rig state the router needs to decide reachability.
///
/// Built fresh by the rig for every event, so routing always sees this
/// frame's truth.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext {
    /// The shared control lock is off.
    pub unlocked: bool,
    /// The attachment is visible and its prop exists.
    pub attachment_adjustable: bool,
}

/// Stateless decoder from key events to commands.
#[derive(Debug, Default)]
pub struct InputRouter;

impl InputRouter {
    /// A router. No transient state today; the type is the seam.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify one key-down event. Returns at most one command; events
    /// matching nothing are ignored.
    #[must_use]
    pub fn route(
        &self,
        event: KeyEvent,
        bindings: &KeybindingOptions,
        ctx: RouteContext,
    ) -> Option<RigCommand> {
        let mods = event.modifiers;

        if mods.none() {
            if let Some(action) = bindings.lookup(event.key) {
                return Some(match action {
                    KeyAction::ToggleActor => RigCommand::ToggleActor,
                    KeyAction::ToggleLock => RigCommand::ToggleLock,
                    KeyAction::ToggleVisibility => {
                        RigCommand::ToggleVisibility
                    }
                    KeyAction::ToggleAttachment => {
                        RigCommand::ToggleAttachment
                    }
                });
            }
        } else if mods.ctrl_only() {
            if bindings.key_for(KeyAction::ToggleLock) == Some(event.key) {
                return Some(RigCommand::SaveSettings);
            }
            if bindings.key_for(KeyAction::ToggleAttachment)
                == Some(event.key)
            {
                return Some(RigCommand::ToggleZoomMode);
            }
        }

        if ctx.unlocked && ctx.attachment_adjustable {
            return Self::route_nudge(event);
        }
        None
    }

    /// The guarded nudge branch: fixed keys, position on bare arrows and
    /// page keys, pitch on Ctrl+vertical arrows.
    fn route_nudge(event: KeyEvent) -> Option<RigCommand> {
        use StepDirection::{Decrease, Increase};
        let mods = event.modifiers;

        if mods.ctrl_only() {
            return match event.key {
                Key::ArrowUp => Some(RigCommand::NudgePitch {
                    direction: Increase,
                }),
                Key::ArrowDown => Some(RigCommand::NudgePitch {
                    direction: Decrease,
                }),
                _ => None,
            };
        }
        if !mods.none() {
            return None;
        }
        let (axis, direction) = match event.key {
            Key::ArrowUp => (OffsetAxis::Vertical, Increase),
            Key::ArrowDown => (OffsetAxis::Vertical, Decrease),
            Key::ArrowRight => (OffsetAxis::Longitudinal, Increase),
            Key::ArrowLeft => (OffsetAxis::Longitudinal, Decrease),
            Key::PageUp => (OffsetAxis::Lateral, Increase),
            Key::PageDown => (OffsetAxis::Lateral, Decrease),
            _ => return None,
        };
        Some(RigCommand::NudgeOffset { axis, direction })
    }
}
