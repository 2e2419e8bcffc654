//! The secondary prop riding the tracked actor at a tunable offset.
//!
//! The offset lives in the actor's local space: each frame it is
//! converted to world space through the actor's current basis vectors,
//! so the prop rigidly follows the actor's orientation rather than the
//! world axes. Offsets are unbounded and persist until an explicit
//! [`reset`](OffsetAttachment::reset); a visibility toggle never clears
//! them.

use glam::Vec3;
use web_time::Duration;

use crate::command::{OffsetAxis, StepDirection};
use crate::error::RigError;
use crate::host::{wait_for_asset, EntityHandle, Host};
use crate::options::AttachmentOptions;

/// Maintains the attached prop and its local offset state.
#[derive(Debug, Default)]
pub struct OffsetAttachment {
    prop: Option<EntityHandle>,
    visible: bool,
    offset: Vec3,
    rotation_offset: Vec3,
}

impl OffsetAttachment {
    /// An attachment with no prop spawned and zero offsets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Local-space position offset (x=lateral, y=longitudinal,
    /// z=vertical).
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Local-space Euler rotation offset in degrees.
    #[must_use]
    pub fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    /// Whether the prop is currently toggled visible.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the prop entity exists this frame.
    #[must_use]
    pub fn exists<H: Host + ?Sized>(&self, host: &H) -> bool {
        self.prop.is_some_and(|p| host.exists(p))
    }

    /// Whether nudges are currently reachable: visible and spawned.
    /// The router adds the lock check on top.
    #[must_use]
    pub fn adjustable<H: Host + ?Sized>(&self, host: &H) -> bool {
        self.visible && self.exists(host)
    }

    /// Flip visibility, lazily spawning the prop on first show.
    ///
    /// Hiding never deletes — position updates continue while hidden so
    /// the prop reappears exactly where expected. Returns the new
    /// visibility.
    ///
    /// # Errors
    /// Propagates asset/spawn failures when the first show has to spawn
    /// the prop; visibility is left off in that case.
    pub fn toggle<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        actor: EntityHandle,
        opts: &AttachmentOptions,
    ) -> Result<bool, RigError> {
        self.visible = !self.visible;

        if self.visible && !self.exists(host) {
            match self.spawn(host, actor, opts) {
                Ok(prop) => self.prop = Some(prop),
                Err(e) => {
                    self.visible = false;
                    return Err(e);
                }
            }
        }

        if let Some(prop) = self.prop.filter(|&p| host.exists(p)) {
            host.set_visible(prop, self.visible);
        }
        Ok(self.visible)
    }

    fn spawn<H: Host + ?Sized>(
        &self,
        host: &mut H,
        actor: EntityHandle,
        opts: &AttachmentOptions,
    ) -> Result<EntityHandle, RigError> {
        wait_for_asset(
            host,
            &opts.prop_asset,
            Duration::from_millis(opts.asset_timeout_ms),
        )?;
        let prop = host.spawn_prop(&opts.prop_asset, host.position(actor))?;
        host.set_collision(prop, false);
        host.set_gravity(prop, false);
        host.release_asset(&opts.prop_asset);
        log::debug!("spawned attachment prop {prop:?}");
        Ok(prop)
    }

    /// Step one axis of the position offset by the configured increment.
    pub fn nudge_offset(
        &mut self,
        axis: OffsetAxis,
        direction: StepDirection,
        opts: &AttachmentOptions,
    ) {
        let step = direction.signum() * opts.move_step;
        match axis {
            OffsetAxis::Lateral => self.offset.x += step,
            OffsetAxis::Longitudinal => self.offset.y += step,
            OffsetAxis::Vertical => self.offset.z += step,
        }
    }

    /// Step the pitch rotation offset by the configured increment.
    pub fn nudge_pitch(
        &mut self,
        direction: StepDirection,
        opts: &AttachmentOptions,
    ) {
        self.rotation_offset.x += direction.signum() * opts.rotate_step;
    }

    /// Zero both offsets. Explicit action only; nothing else clears
    /// them.
    pub fn reset(&mut self) {
        self.offset = Vec3::ZERO;
        self.rotation_offset = Vec3::ZERO;
    }

    /// Delete the prop. Called exactly when the tracked actor is torn
    /// down; the offsets persist for the next spawn.
    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(prop) = self.prop.take() {
            if host.exists(prop) {
                host.delete(prop);
            }
            log::debug!("deleted attachment prop {prop:?}");
        }
        self.visible = false;
    }

    /// Per-frame update: re-assert passive physics and place the prop
    /// at the actor's pose plus the local offsets.
    pub fn update<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        actor: EntityHandle,
    ) {
        let Some(prop) = self.prop else {
            return;
        };
        if !host.exists(prop) {
            self.prop = None;
            return;
        }

        host.set_collision(prop, false);
        host.set_gravity(prop, false);

        let basis = host.basis(actor);
        let world_pos = host.position(actor)
            + basis.right * self.offset.x
            + basis.forward * self.offset.y
            + basis.up * self.offset.z;
        host.set_position(prop, world_pos);
        host.set_rotation(prop, host.rotation(actor) + self.rotation_offset);
    }
}
