use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follower", inline)]
#[serde(default)]
/// Tracked-actor follow and inertia-compensation parameters.
pub struct FollowerOptions {
    /// Host asset name for the tracked actor.
    #[schemars(skip)]
    pub actor_asset: String,
    /// Fraction of the remaining position error converted to velocity
    /// each frame in smoothed mode.
    #[schemars(title = "Position Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub positional_smoothing: f32,
    /// Per-frame ease factor for rotation interpolation.
    #[schemars(title = "Rotation Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotational_smoothing: f32,
    /// Snap directly to the target pose instead of smoothing.
    #[schemars(title = "Snap Mode")]
    pub snap: bool,
    /// How much of the carrier's velocity is added as positional lead.
    #[schemars(title = "Inertia Compensation", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub compensation_factor: f32,
    /// Also add the inertia lead to the desired velocity in smoothed
    /// mode, on top of the lead already in the target position. The
    /// double application gives a stronger lead under acceleration;
    /// disabling this applies the lead to the target only.
    #[schemars(title = "Lead In Velocity")]
    pub lead_in_velocity: bool,
    /// Distance the actor sits ahead of the camera along its forward
    /// vector.
    #[schemars(skip)]
    pub forward_distance: f32,
    /// Fixed world-space offset added to the target position.
    #[schemars(skip)]
    pub static_offset: Vec3,
    /// Distance ahead of the owner where the actor spawns.
    #[schemars(skip)]
    pub spawn_distance: f32,
    /// Health value re-asserted on the actor every frame.
    #[schemars(skip)]
    pub held_health: i32,
    /// Deadline in milliseconds for the actor asset to load at spawn.
    #[schemars(skip)]
    pub asset_timeout_ms: u64,
}

impl Default for FollowerOptions {
    fn default() -> Self {
        Self {
            actor_asset: "follow_actor".to_owned(),
            positional_smoothing: 0.3,
            rotational_smoothing: 0.3,
            snap: false,
            compensation_factor: 0.18,
            lead_in_velocity: true,
            forward_distance: 1.0,
            static_offset: Vec3::ZERO,
            spawn_distance: 2.0,
            held_health: 10,
            asset_timeout_ms: 5000,
        }
    }
}
