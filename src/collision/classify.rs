use crate::core::types::{Axis, VolumeType};

/// Parses a free-text shape descriptor from object-definition data.
///
/// Matching is case-insensitive and substring based. Later matches win over
/// earlier ones in the order `ell`, `cyl`, `box`, `footprint`, so `"boxcyl"`
/// is a box. Anything unrecognized becomes a Z-axis footprint.
///
/// A cylinder picks up an axis only from a four-character descriptor whose
/// last character is `x`, `y` or `z` (`"cylx"`, `"CylY"`); every other form
/// keeps the Z default.
pub fn classify_shape(descriptor: &str) -> (VolumeType, Axis) {
    let mut shape = VolumeType::Footprint;
    let mut axis = Axis::Z;

    if descriptor.is_empty() {
        return (shape, axis);
    }

    let lower = descriptor.to_ascii_lowercase();

    if lower.contains("ell") {
        shape = VolumeType::Ellipsoid;
    }

    if lower.contains("cyl") {
        shape = VolumeType::Cylinder;

        if lower.len() == 4 {
            match lower.as_bytes()[3] {
                b'x' => axis = Axis::X,
                b'y' => axis = Axis::Y,
                b'z' => axis = Axis::Z,
                _ => {}
            }
        }
    }

    if lower.contains("box") {
        shape = VolumeType::Box;
    }

    if lower.contains("footprint") {
        shape = VolumeType::Footprint;
    }

    (shape, axis)
}
