//! The rig's complete interactive vocabulary.
//!
//! Every user-facing operation — whether decoded from a key event by the
//! [`InputRouter`](crate::input::InputRouter) or issued programmatically
//! by the embedder — is represented as a [`RigCommand`] and passed to
//! [`CameraRig::execute`](crate::rig::CameraRig::execute). The rig never
//! cares *how* a command was triggered.

/// Local axis of the attachment offset a nudge applies to.
///
/// Axes are named for the basis vector they scale in the prop's
/// local-to-world transform, not for world directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetAxis {
    /// Along the tracked actor's right vector (offset `x`).
    Lateral,
    /// Along the tracked actor's forward vector (offset `y`).
    Longitudinal,
    /// Along the tracked actor's up vector (offset `z`).
    Vertical,
}

/// Direction of a stepped adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Add one increment.
    Increase,
    /// Subtract one increment.
    Decrease,
}

impl StepDirection {
    /// `+1.0` for increase, `-1.0` for decrease.
    #[must_use]
    pub const fn signum(self) -> f32 {
        match self {
            Self::Increase => 1.0,
            Self::Decrease => -1.0,
        }
    }
}

/// A discrete operation the rig can perform.
///
/// At most one command is produced per key event; commands gated by the
/// shared lock are still *produced* while locked (so the rig can surface
/// a "locked" notice), except the offset nudges, which the router only
/// emits when they are actually reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigCommand {
    /// Spawn the tracked actor, or delete it (and its prop) if present.
    ToggleActor,
    /// Persist the current offsets — surfaced to the embedder, which
    /// owns the settings file.
    SaveSettings,
    /// Flip the shared control lock.
    ToggleLock,
    /// Flip the tracked actor's visibility/collision override.
    ToggleVisibility,
    /// Show the attachment prop (spawning it on first use) or hide it.
    ToggleAttachment,
    /// Switch the zoom controller between discrete and continuous mode.
    ToggleZoomMode,
    /// Step one axis of the attachment's position offset.
    NudgeOffset {
        /// Which local axis to step.
        axis: OffsetAxis,
        /// Which way to step it.
        direction: StepDirection,
    },
    /// Step the attachment's pitch rotation offset.
    NudgePitch {
        /// Which way to step.
        direction: StepDirection,
    },
}
