//! The narrow interface to the host simulation.
//!
//! The rig never talks to the simulation engine directly; everything it
//! reads or commands goes through the [`Host`] trait. The embedder
//! implements it over the real scripting runtime, and tests implement it
//! over an in-memory double, so every frame of control logic is
//! deterministic against explicit state.

#[cfg(test)]
pub(crate) mod mock;

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::error::RigError;
use crate::util::angle::forward_from_rotation;

/// Opaque handle to a host-side entity.
///
/// The host owns the handle space; the rig only stores and compares
/// handles and re-checks [`Host::exists`] every frame before using one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(u64);

impl EntityHandle {
    /// Wrap a raw host handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Read-only camera snapshot, taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    /// World position of the camera.
    pub position: Vec3,
    /// Euler rotation in degrees (pitch, roll, yaw).
    pub rotation: Vec3,
    /// Current rendered field of view in degrees.
    pub fov: f32,
}

impl CameraSample {
    /// Forward unit vector derived from the rotation (yaw/pitch only).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        forward_from_rotation(self.rotation)
    }
}

/// Orthonormal basis of an entity in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityBasis {
    /// Local +X axis in world space.
    pub right: Vec3,
    /// Local +Y axis in world space.
    pub forward: Vec3,
    /// Local +Z axis in world space.
    pub up: Vec3,
}

/// Controls the zoom controller polls for held state each frame.
///
/// Key-down *events* go through [`KeyEvent`](crate::input::KeyEvent);
/// these are the continuously-sampled inputs (buttons that can be held,
/// scroll wheel direction, modifier keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldControl {
    /// The designated "zoom in" control (held in continuous mode).
    ZoomIn,
    /// The designated "zoom out" control (held in continuous mode).
    ZoomOut,
    /// One notch of scroll toward zoom-in (discrete mode).
    ScrollUp,
    /// One notch of scroll toward zoom-out (discrete mode).
    ScrollDown,
    /// The dedicated zoom-reset button.
    ZoomReset,
    /// Control modifier key.
    Ctrl,
    /// Shift modifier key.
    Shift,
}

/// Read/command surface of the host simulation.
///
/// Everything here is a thin passthrough; the host performs no logic of
/// its own on behalf of the rig. All setters are expected to be
/// idempotent — the follower re-asserts several of them every frame
/// because the host's own systems would otherwise revert them.
pub trait Host {
    /// Camera snapshot for this frame, if a camera is rendering.
    fn camera(&self) -> Option<CameraSample>;

    /// Write a new field of view to the rendering camera.
    fn set_camera_fov(&mut self, fov: f32);

    /// World position of the camera's owner (the player actor).
    fn owner_position(&self) -> Vec3;

    /// Forward vector of the camera's owner.
    fn owner_forward(&self) -> Vec3;

    /// The vehicle the camera's owner currently occupies, if any.
    fn carrier(&self) -> Option<EntityHandle>;

    /// The entity this entity is physically attached to, if any.
    fn attachment_parent(&self, entity: EntityHandle) -> Option<EntityHandle>;

    /// Whether the entity's model classifies as a vehicle.
    fn is_vehicle(&self, entity: EntityHandle) -> bool;

    /// Current velocity of an entity in world units/second.
    fn velocity(&self, entity: EntityHandle) -> Vec3;

    /// Begin loading a named visual asset.
    ///
    /// # Errors
    /// [`RigError::AssetNotFound`] if the host does not recognize the
    /// asset name.
    fn request_asset(&mut self, name: &str) -> Result<(), RigError>;

    /// Whether a previously requested asset has finished loading.
    fn asset_loaded(&self, name: &str) -> bool;

    /// Tell the host the asset is no longer pinned by this script.
    fn release_asset(&mut self, name: &str);

    /// Spawn an animated actor from a loaded asset.
    ///
    /// # Errors
    /// [`RigError::Spawn`] if the host refuses the spawn.
    fn spawn_actor(
        &mut self,
        asset: &str,
        position: Vec3,
    ) -> Result<EntityHandle, RigError>;

    /// Spawn a static prop from a loaded asset.
    ///
    /// # Errors
    /// [`RigError::Spawn`] if the host refuses the spawn.
    fn spawn_prop(
        &mut self,
        asset: &str,
        position: Vec3,
    ) -> Result<EntityHandle, RigError>;

    /// Delete an entity. Deleting a stale handle is a no-op.
    fn delete(&mut self, entity: EntityHandle);

    /// Whether the handle still refers to a live entity.
    fn exists(&self, entity: EntityHandle) -> bool;

    /// World position of an entity.
    fn position(&self, entity: EntityHandle) -> Vec3;

    /// Teleport an entity to a world position.
    fn set_position(&mut self, entity: EntityHandle, position: Vec3);

    /// Euler rotation of an entity in degrees.
    fn rotation(&self, entity: EntityHandle) -> Vec3;

    /// Write an entity's Euler rotation in degrees.
    fn set_rotation(&mut self, entity: EntityHandle, rotation: Vec3);

    /// Set an entity's instantaneous velocity, letting the host's
    /// physics integrate the motion.
    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec3);

    /// Orthonormal basis vectors of an entity.
    fn basis(&self, entity: EntityHandle) -> EntityBasis;

    /// Show or hide an entity.
    fn set_visible(&mut self, entity: EntityHandle, visible: bool);

    /// Enable or disable collision for an entity.
    fn set_collision(&mut self, entity: EntityHandle, enabled: bool);

    /// Enable or disable gravity for an entity.
    fn set_gravity(&mut self, entity: EntityHandle, enabled: bool);

    /// Mark an entity as physically dynamic.
    fn set_dynamic(&mut self, entity: EntityHandle, dynamic: bool);

    /// Write an entity's health value.
    fn set_health(&mut self, entity: EntityHandle, health: i32);

    /// Command an actor into a passive held-ragdoll state.
    fn hold_ragdoll(&mut self, entity: EntityHandle);

    /// Whether a polled control is currently held.
    fn control_held(&self, control: HeldControl) -> bool;
}

/// Interval between load-completion polls in [`wait_for_asset`].
const ASSET_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Request an asset and wait, bounded by `timeout`, for it to load.
///
/// Polls [`Host::asset_loaded`] at a fixed interval until the asset is
/// ready or the deadline passes. The wait is synchronous; spawn paths
/// call it once, before creating an entity.
///
/// # Errors
/// [`RigError::AssetNotFound`] if the host rejects the name, or
/// [`RigError::AssetLoadTimeout`] if the deadline expires first.
pub fn wait_for_asset<H: Host + ?Sized>(
    host: &mut H,
    name: &str,
    timeout: Duration,
) -> Result<(), RigError> {
    host.request_asset(name)?;
    let started = Instant::now();
    loop {
        if host.asset_loaded(name) {
            return Ok(());
        }
        let waited = started.elapsed();
        if waited >= timeout {
            log::warn!("asset {name} not loaded after {waited:?}, giving up");
            return Err(RigError::AssetLoadTimeout {
                name: name.to_owned(),
                waited,
            });
        }
        std::thread::sleep(ASSET_POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockHost;
    use super::*;

    #[test]
    fn wait_for_asset_returns_when_loaded() {
        let mut host = MockHost::new();
        host.register_asset("follow_actor");
        assert!(wait_for_asset(
            &mut host,
            "follow_actor",
            Duration::from_secs(1)
        )
        .is_ok());
    }

    #[test]
    fn wait_for_asset_surfaces_unknown_name() {
        let mut host = MockHost::new();
        let err = wait_for_asset(&mut host, "bogus", Duration::from_secs(1));
        assert!(matches!(err, Err(RigError::AssetNotFound(name)) if name == "bogus"));
    }

    #[test]
    fn wait_for_asset_times_out_on_stalled_load() {
        let mut host = MockHost::new();
        host.register_stalled_asset("slow_asset");
        let err = wait_for_asset(&mut host, "slow_asset", Duration::ZERO);
        assert!(matches!(
            err,
            Err(RigError::AssetLoadTimeout { name, .. }) if name == "slow_asset"
        ));
    }

    #[test]
    fn camera_sample_forward_matches_rotation() {
        let sample = CameraSample {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fov: 68.0,
        };
        assert!((sample.forward() - Vec3::Y).length() < 1e-5);
    }
}
