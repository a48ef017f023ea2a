//! Small helpers on top of [Vec3A] that glam does not provide directly

use glam::Vec3A;

/// Components smaller than this are treated as zero by [near_zero].
const NEAR_ZERO: f32 = 1e-8;

/// Returns `v` scaled to unit length.
///
/// Zero-length or non-finite input yields [Vec3A::ZERO] instead of NaN,
/// so callers can detect the degenerate case rather than propagate it.
#[inline]
pub fn unit_vector(v: Vec3A) -> Vec3A {
    v.normalize_or_zero()
}

/// Returns whether every component of `v` is close to zero.
#[inline]
pub fn near_zero(v: Vec3A) -> bool {
    v.abs().cmplt(Vec3A::splat(NEAR_ZERO)).all()
}
