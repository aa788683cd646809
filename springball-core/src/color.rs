use glam::Vec3;

/// Grayscale color for a ball at height `y`, as linear RGB in [0, 1].
///
/// Black at y = 0, white once |y| reaches 2. The blend factor is clamped so
/// heights beyond 2 stay white instead of extrapolating past the gradient.
pub fn height_to_gray(y: f64) -> Vec3 {
    let t = (y / 2.0).abs().clamp(0.0, 1.0) as f32;
    Vec3::ZERO.lerp(Vec3::ONE, t)
}
