//! Circular orbit math for the shooting star.

use glam::Vec3;

/// Point on a circle of `radius` around `center`, in the horizontal
/// plane at the center's height. Angle is unbounded; callers accumulate.
pub fn position_on(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    Vec3::new(
        center.x + angle.cos() * radius,
        center.y,
        center.z + angle.sin() * radius,
    )
}

/// Advance an orbit angle by one step. The multiplier carries any
/// active boost; 1.0 otherwise.
pub fn advance_angle(angle: f32, base_speed: f32, multiplier: f32, dt: f32) -> f32 {
    angle + base_speed * multiplier * dt
}
