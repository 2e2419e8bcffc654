//! Effective carrier velocity for inertia compensation.

use glam::Vec3;

use crate::host::Host;

/// Velocity the follower should lead against this frame.
///
/// When the camera's owner rides a vehicle that is itself attached to
/// another vehicle (towed, ferried, carried on a trailer), the inner
/// vehicle's relative velocity is zero and useless for compensation —
/// what matters is the outer vehicle's motion. One level of parent
/// lookup with a vehicle type check covers that case; deeper chains are
/// deliberately not followed.
///
/// Returns zero when the owner is not in a vehicle at all.
#[must_use]
pub fn inertia_velocity<H: Host + ?Sized>(host: &H) -> Vec3 {
    let Some(carrier) = host.carrier() else {
        return Vec3::ZERO;
    };
    if let Some(parent) = host.attachment_parent(carrier) {
        if host.is_vehicle(parent) {
            return host.velocity(parent);
        }
    }
    host.velocity(carrier)
}
