//! Global configuration constants for collision volumes.

use glam::Vec3;

/// Tolerance under which ellipsoid half-scales count as equal.
pub const SPHERE_PROMOTION_EPSILON: f32 = 1e-4;

/// Full axis extents of a default-constructed volume.
pub const DEFAULT_AXIS_SCALES: Vec3 = Vec3::splat(2.0);

/// Scales left behind by a definition that never set any.
///
/// Object loaders replace volumes carrying these scales with one sized
/// from the model radius.
pub const UNSET_AXIS_SCALES: Vec3 = Vec3::ONE;

/// Floor applied to every scale component during initialization.
pub const MIN_AXIS_SCALE: f32 = 1.0;

/// Log target used by [`crate::utils::logging::LogSink`].
pub const LOG_TARGET: &str = "CollisionVolume";
