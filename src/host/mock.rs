//! Deterministic in-memory [`Host`] double for unit tests.

use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{CameraSample, EntityBasis, EntityHandle, HeldControl, Host};
use crate::error::RigError;

/// One simulated entity's mutable state.
#[derive(Debug, Clone)]
pub(crate) struct MockEntity {
    pub(crate) position: Vec3,
    pub(crate) rotation: Vec3,
    pub(crate) velocity: Vec3,
    pub(crate) visible: bool,
    pub(crate) collision: bool,
    pub(crate) gravity: bool,
    pub(crate) dynamic: bool,
    pub(crate) health: i32,
    /// Times `hold_ragdoll` has been commanded on this entity.
    pub(crate) ragdoll_holds: u32,
}

impl MockEntity {
    fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            visible: true,
            collision: true,
            gravity: true,
            dynamic: false,
            health: 100,
            ragdoll_holds: 0,
        }
    }
}

/// In-memory simulation state with a fully scriptable surface.
///
/// Entities spawn with host-default state (visible, collidable, under
/// gravity) so tests observe the rig overriding those defaults. Assets
/// registered via [`register_asset`](Self::register_asset) load
/// instantly; [`register_stalled_asset`](Self::register_stalled_asset)
/// never completes, for exercising the bounded wait.
pub(crate) struct MockHost {
    next_handle: u64,
    entities: FxHashMap<EntityHandle, MockEntity>,
    known_assets: FxHashSet<String>,
    stalled_assets: FxHashSet<String>,
    pub(crate) camera: Option<CameraSample>,
    /// Last FOV written back to the camera, if any.
    pub(crate) written_fov: Option<f32>,
    pub(crate) owner_position: Vec3,
    pub(crate) owner_forward: Vec3,
    pub(crate) carrier: Option<EntityHandle>,
    parents: FxHashMap<EntityHandle, EntityHandle>,
    vehicles: FxHashSet<EntityHandle>,
    held: FxHashSet<HeldControl>,
    bases: FxHashMap<EntityHandle, EntityBasis>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self {
            next_handle: 1,
            entities: FxHashMap::default(),
            known_assets: FxHashSet::default(),
            stalled_assets: FxHashSet::default(),
            camera: Some(CameraSample {
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                fov: 68.0,
            }),
            written_fov: None,
            owner_position: Vec3::ZERO,
            owner_forward: Vec3::Y,
            carrier: None,
            parents: FxHashMap::default(),
            vehicles: FxHashSet::default(),
            held: FxHashSet::default(),
            bases: FxHashMap::default(),
        }
    }

    /// Make an asset name known to the host; it loads instantly.
    pub(crate) fn register_asset(&mut self, name: &str) {
        let _ = self.known_assets.insert(name.to_owned());
    }

    /// Make an asset known but never finish loading it.
    pub(crate) fn register_stalled_asset(&mut self, name: &str) {
        let _ = self.known_assets.insert(name.to_owned());
        let _ = self.stalled_assets.insert(name.to_owned());
    }

    /// Spawn a bare entity outside the rig's control (vehicles, parents).
    pub(crate) fn spawn_raw(&mut self, position: Vec3) -> EntityHandle {
        let handle = EntityHandle::new(self.next_handle);
        self.next_handle += 1;
        let _ = self.entities.insert(handle, MockEntity::at(position));
        handle
    }

    /// Spawn a raw entity classified as a vehicle.
    pub(crate) fn spawn_vehicle(&mut self, position: Vec3) -> EntityHandle {
        let handle = self.spawn_raw(position);
        let _ = self.vehicles.insert(handle);
        handle
    }

    /// Attach `child` to `parent` for `attachment_parent` queries.
    pub(crate) fn attach(&mut self, child: EntityHandle, parent: EntityHandle) {
        let _ = self.parents.insert(child, parent);
    }

    /// Press or release a polled control.
    pub(crate) fn set_held(&mut self, control: HeldControl, held: bool) {
        if held {
            let _ = self.held.insert(control);
        } else {
            let _ = self.held.remove(&control);
        }
    }

    /// Override the basis vectors reported for an entity.
    pub(crate) fn set_basis(&mut self, entity: EntityHandle, basis: EntityBasis) {
        let _ = self.bases.insert(entity, basis);
    }

    /// Direct access to an entity's state for assertions.
    ///
    /// Panics if the handle is stale; tests want that loudly.
    pub(crate) fn entity(&self, handle: EntityHandle) -> &MockEntity {
        &self.entities[&handle]
    }

    fn entity_mut(&mut self, handle: EntityHandle) -> Option<&mut MockEntity> {
        self.entities.get_mut(&handle)
    }
}

impl Host for MockHost {
    fn camera(&self) -> Option<CameraSample> {
        self.camera
    }

    fn set_camera_fov(&mut self, fov: f32) {
        self.written_fov = Some(fov);
        if let Some(cam) = self.camera.as_mut() {
            cam.fov = fov;
        }
    }

    fn owner_position(&self) -> Vec3 {
        self.owner_position
    }

    fn owner_forward(&self) -> Vec3 {
        self.owner_forward
    }

    fn carrier(&self) -> Option<EntityHandle> {
        self.carrier
    }

    fn attachment_parent(&self, entity: EntityHandle) -> Option<EntityHandle> {
        self.parents.get(&entity).copied()
    }

    fn is_vehicle(&self, entity: EntityHandle) -> bool {
        self.vehicles.contains(&entity)
    }

    fn velocity(&self, entity: EntityHandle) -> Vec3 {
        self.entities
            .get(&entity)
            .map_or(Vec3::ZERO, |e| e.velocity)
    }

    fn request_asset(&mut self, name: &str) -> Result<(), RigError> {
        if self.known_assets.contains(name) {
            Ok(())
        } else {
            Err(RigError::AssetNotFound(name.to_owned()))
        }
    }

    fn asset_loaded(&self, name: &str) -> bool {
        self.known_assets.contains(name) && !self.stalled_assets.contains(name)
    }

    fn release_asset(&mut self, _name: &str) {}

    fn spawn_actor(
        &mut self,
        _asset: &str,
        position: Vec3,
    ) -> Result<EntityHandle, RigError> {
        Ok(self.spawn_raw(position))
    }

    fn spawn_prop(
        &mut self,
        _asset: &str,
        position: Vec3,
    ) -> Result<EntityHandle, RigError> {
        Ok(self.spawn_raw(position))
    }

    fn delete(&mut self, entity: EntityHandle) {
        let _ = self.entities.remove(&entity);
    }

    fn exists(&self, entity: EntityHandle) -> bool {
        self.entities.contains_key(&entity)
    }

    fn position(&self, entity: EntityHandle) -> Vec3 {
        self.entities
            .get(&entity)
            .map_or(Vec3::ZERO, |e| e.position)
    }

    fn set_position(&mut self, entity: EntityHandle, position: Vec3) {
        if let Some(e) = self.entity_mut(entity) {
            e.position = position;
        }
    }

    fn rotation(&self, entity: EntityHandle) -> Vec3 {
        self.entities
            .get(&entity)
            .map_or(Vec3::ZERO, |e| e.rotation)
    }

    fn set_rotation(&mut self, entity: EntityHandle, rotation: Vec3) {
        if let Some(e) = self.entity_mut(entity) {
            e.rotation = rotation;
        }
    }

    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec3) {
        if let Some(e) = self.entity_mut(entity) {
            e.velocity = velocity;
        }
    }

    fn basis(&self, entity: EntityHandle) -> EntityBasis {
        self.bases.get(&entity).copied().unwrap_or(EntityBasis {
            right: Vec3::X,
            forward: Vec3::Y,
            up: Vec3::Z,
        })
    }

    fn set_visible(&mut self, entity: EntityHandle, visible: bool) {
        if let Some(e) = self.entity_mut(entity) {
            e.visible = visible;
        }
    }

    fn set_collision(&mut self, entity: EntityHandle, enabled: bool) {
        if let Some(e) = self.entity_mut(entity) {
            e.collision = enabled;
        }
    }

    fn set_gravity(&mut self, entity: EntityHandle, enabled: bool) {
        if let Some(e) = self.entity_mut(entity) {
            e.gravity = enabled;
        }
    }

    fn set_dynamic(&mut self, entity: EntityHandle, dynamic: bool) {
        if let Some(e) = self.entity_mut(entity) {
            e.dynamic = dynamic;
        }
    }

    fn set_health(&mut self, entity: EntityHandle, health: i32) {
        if let Some(e) = self.entity_mut(entity) {
            e.health = health;
        }
    }

    fn hold_ragdoll(&mut self, entity: EntityHandle) {
        if let Some(e) = self.entity_mut(entity) {
            e.ragdoll_holds += 1;
        }
    }

    fn control_held(&self, control: HeldControl) -> bool {
        self.held.contains(&control)
    }
}
