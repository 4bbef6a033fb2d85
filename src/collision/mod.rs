//! Collision-facing helpers: shape descriptor classification.

pub mod classify;

pub use classify::classify_shape;
