//! Collision volumes for simulated objects.
//!
//! A [`CollisionVolume`] approximates an object's physical bounds with one
//! of five axis-aligned shapes (sphere, ellipsoid, cylinder, box, footprint)
//! and derives the half-extent tables and enclosing-sphere radius that
//! collision queries use for cheap pruning. Volumes are built from
//! free-text definitions, cloned from prototypes, and rescaled in place.

pub mod collision;
pub mod config;
pub mod core;
pub mod definition;
pub mod utils;

pub use glam::Vec3;

pub use crate::collision::classify::classify_shape;
pub use crate::core::{
    types::{Axis, TestType, VolumeType},
    volume::CollisionVolume,
};
pub use definition::{DefinitionError, VolumeDefinition};
pub use utils::{
    logging::{DiagnosticSink, LogSink, NullSink, VolumeEvent},
    parallel::{rescale_volumes, rescale_volumes_each},
};
