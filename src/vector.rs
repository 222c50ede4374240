//! Vector helpers used by the bake passes.

use nalgebra::Vector3;

/// Collapse an RGB triplet to a single intensity: the brightest channel.
///
/// Deliberately not a weighted luminance — any channel saturating indicates
/// illumination from the pass's light direction.
#[inline]
pub fn intensity(pixel: Vector3<f32>) -> f32 {
    pixel.x.max(pixel.y).max(pixel.z)
}

/// Sum of squares of the components.
#[inline]
pub fn dot(v: Vector3<f32>) -> f32 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Scale `v` to unit length via `v * (1 / sqrt(dot(v)))`.
///
/// The zero vector produces non-finite components (1/sqrt(0) = inf, then
/// inf * 0 = NaN). Callers feeding degenerate all-dark inputs get NaN normals
/// rather than a panic; the hot loop stays branch-free.
#[inline]
pub fn normalize(v: Vector3<f32>) -> Vector3<f32> {
    v * (1.0 / dot(v).sqrt())
}
