use serde::{Deserialize, Serialize};

/// Geometric shape a collision volume approximates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeType {
    Ellipsoid = 0,
    Cylinder = 1,
    Box = 2,
    Sphere = 3,
    /// Intersection of the ground-footprint prism and a bounding sphere.
    Footprint = 4,
}

impl VolumeType {
    pub const COUNT: i32 = 5;

    const ALL: [VolumeType; 5] = [
        VolumeType::Ellipsoid,
        VolumeType::Cylinder,
        VolumeType::Box,
        VolumeType::Sphere,
        VolumeType::Footprint,
    ];

    /// Maps a raw definition value into range as `max(0, raw) % COUNT`.
    pub fn from_raw(raw: i32) -> Self {
        Self::ALL[wrap_index(raw, Self::COUNT)]
    }

    pub fn name(self) -> &'static str {
        match self {
            VolumeType::Ellipsoid => "ellipsoid",
            VolumeType::Cylinder => "cylinder",
            VolumeType::Box => "box",
            VolumeType::Sphere => "sphere",
            VolumeType::Footprint => "footprint",
        }
    }
}

/// Exact-overlap algorithm downstream collision code should run.
///
/// Stored and copied around, never interpreted by the volume itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestType {
    #[default]
    Discrete = 0,
    Continuous = 1,
}

impl TestType {
    pub const COUNT: i32 = 2;

    pub fn from_raw(raw: i32) -> Self {
        match wrap_index(raw, Self::COUNT) {
            0 => TestType::Discrete,
            _ => TestType::Continuous,
        }
    }
}

/// Coordinate axis; the primary axis of a cylinder is its length axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X = 0,
    Y = 1,
    #[default]
    Z = 2,
}

impl Axis {
    pub const COUNT: i32 = 3;

    pub fn from_raw(raw: i32) -> Self {
        match wrap_index(raw, Self::COUNT) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The two axes spanning the cross-section perpendicular to `self`.
    pub fn complement(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

// Negative values floor to zero; they do not wrap around.
fn wrap_index(raw: i32, count: i32) -> usize {
    (raw.max(0) % count) as usize
}
