//! Core value types: shape enums and the collision volume itself.

pub mod types;
pub mod volume;

pub use types::{Axis, TestType, VolumeType};
pub use volume::CollisionVolume;
