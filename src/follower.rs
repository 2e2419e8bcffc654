//! Per-frame pose control for the tracked actor.
//!
//! Each frame the follower computes where the actor should sit relative
//! to the camera and either eases it there through a velocity write
//! (letting the host's physics integrate the motion, which avoids
//! teleport artifacts) or snaps it directly. When the camera's owner is
//! riding a vehicle, the target is led ahead by a fraction of the
//! carrier's velocity so the actor does not visibly lag under
//! acceleration.

use glam::Vec3;
use web_time::Duration;

use crate::error::RigError;
use crate::host::{wait_for_asset, EntityHandle, Host};
use crate::inertia::inertia_velocity;
use crate::options::FollowerOptions;
use crate::util::angle::lerp_rotation;

/// Drives the tracked actor's position and rotation every frame.
#[derive(Debug, Default)]
pub struct PoseFollower {
    actor: Option<EntityHandle>,
    visibility_override: bool,
}

impl PoseFollower {
    /// A follower with no actor spawned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the tracked actor, if one has been spawned.
    #[must_use]
    pub fn actor(&self) -> Option<EntityHandle> {
        self.actor
    }

    /// Handle of the tracked actor if the host still knows it.
    #[must_use]
    pub fn live_actor<H: Host + ?Sized>(
        &self,
        host: &H,
    ) -> Option<EntityHandle> {
        self.actor.filter(|&a| host.exists(a))
    }

    /// Whether the actor exists this frame.
    #[must_use]
    pub fn is_spawned<H: Host + ?Sized>(&self, host: &H) -> bool {
        self.live_actor(host).is_some()
    }

    /// Whether the visibility/collision override is active.
    #[must_use]
    pub fn visibility_override(&self) -> bool {
        self.visibility_override
    }

    /// Spawn the tracked actor ahead of the camera's owner.
    ///
    /// Waits (bounded) for the actor asset, spawns it, and immediately
    /// puts it in its passive state: no collision, no gravity, hidden,
    /// held in ragdoll. The visibility override resets to off.
    ///
    /// # Errors
    /// Propagates asset and spawn failures from the host; the follower
    /// is unchanged on error.
    pub fn spawn<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        opts: &FollowerOptions,
    ) -> Result<EntityHandle, RigError> {
        wait_for_asset(
            host,
            &opts.actor_asset,
            Duration::from_millis(opts.asset_timeout_ms),
        )?;

        let position = host.owner_position()
            + host.owner_forward() * opts.spawn_distance;
        let actor = host.spawn_actor(&opts.actor_asset, position)?;
        host.set_collision(actor, false);
        host.set_gravity(actor, false);
        host.set_visible(actor, false);
        host.hold_ragdoll(actor);
        host.release_asset(&opts.actor_asset);

        log::debug!("spawned tracked actor {actor:?} at {position}");
        self.visibility_override = false;
        self.actor = Some(actor);
        Ok(actor)
    }

    /// Delete the tracked actor, if any.
    ///
    /// The caller owns teardown ordering: the attachment prop must be
    /// deleted in the same operation (see
    /// [`CameraRig::execute`](crate::rig::CameraRig::execute)).
    pub fn despawn<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(actor) = self.actor.take() {
            if host.exists(actor) {
                host.delete(actor);
            }
            log::debug!("deleted tracked actor {actor:?}");
        }
        self.visibility_override = false;
    }

    /// Flip the visibility/collision override and apply it immediately,
    /// returning the new state.
    pub fn toggle_visibility_override<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> bool {
        self.visibility_override = !self.visibility_override;
        if let Some(actor) = self.live_actor(host) {
            host.set_visible(actor, self.visibility_override);
            host.set_collision(actor, self.visibility_override);
        }
        self.visibility_override
    }

    /// Per-frame update.
    ///
    /// Always re-asserts the passive state first; if no camera sample is
    /// available this frame the pose work is skipped entirely and the
    /// update self-heals next frame.
    pub fn update<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        opts: &FollowerOptions,
    ) {
        let Some(actor) = self.actor else {
            return;
        };
        if !host.exists(actor) {
            // Host deleted it out from under us; forget the handle.
            self.actor = None;
            return;
        }

        self.enforce_passive_state(host, actor, opts);

        let Some(cam) = host.camera() else {
            return;
        };

        let mut target = cam.position
            + cam.forward() * opts.forward_distance
            + opts.static_offset;

        let in_carrier = host.carrier().is_some();
        let lead = if in_carrier {
            inertia_velocity(host) * opts.compensation_factor
        } else {
            Vec3::ZERO
        };
        target += lead;

        if opts.snap {
            host.set_position(actor, target);
            host.set_rotation(actor, cam.rotation);
        } else {
            let delta = target - host.position(actor);
            let mut desired_velocity = delta * opts.positional_smoothing;
            if in_carrier && opts.lead_in_velocity {
                desired_velocity += lead;
            }
            host.set_velocity(actor, desired_velocity);

            let rotation = lerp_rotation(
                host.rotation(actor),
                cam.rotation,
                opts.rotational_smoothing,
            );
            host.set_rotation(actor, rotation);
        }
    }

    /// Re-assert the state that keeps the actor passive and ignored by
    /// the host's own AI/physics.
    ///
    /// The host reverts health, collision, gravity, and ragdoll state on
    /// its own schedule, so this runs every frame. Idempotent. When the
    /// visibility override is active, visibility and collision are
    /// forced back on afterwards — the only branch that defeats the
    /// stay-hidden default.
    fn enforce_passive_state<H: Host + ?Sized>(
        &self,
        host: &mut H,
        actor: EntityHandle,
        opts: &FollowerOptions,
    ) {
        host.set_health(actor, opts.held_health);
        host.set_collision(actor, false);
        host.set_gravity(actor, false);
        host.set_dynamic(actor, true);
        host.hold_ragdoll(actor);

        if self.visibility_override {
            host.set_visible(actor, true);
            host.set_collision(actor, true);
        }
    }
}
