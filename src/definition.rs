//! Volume definitions as they appear in external object-definition data.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::classify::classify_shape;
use crate::config::UNSET_AXIS_SCALES;
use crate::core::types::{Axis, TestType};
use crate::core::volume::CollisionVolume;
use crate::utils::logging::{DiagnosticSink, LogSink};

/// Errors raised while reading definition text.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to parse volume definition: {0}")]
    Parse(String),
}

/// Raw collision-volume block of an object definition.
///
/// ```ron
/// (shape: "cylY", scales: Some((10.0, 30.0, 10.0)), offsets: (0.0, 5.0, 0.0), test: 1)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeDefinition {
    /// Free-text shape descriptor, e.g. `"ellipsoid"` or `"cylX"`.
    pub shape: String,
    /// Full extents; `None` leaves the size to the model loader.
    pub scales: Option<Vec3>,
    pub offsets: Vec3,
    /// Raw test kind, clamped into range on build.
    pub test: i32,
    /// Explicit primary axis overriding the one read from `shape`.
    pub axis: Option<i32>,
}

impl Default for VolumeDefinition {
    fn default() -> Self {
        Self {
            shape: String::new(),
            scales: None,
            offsets: Vec3::ZERO,
            test: 0,
            axis: None,
        }
    }
}

impl VolumeDefinition {
    pub fn from_ron(text: &str) -> Result<Self, DefinitionError> {
        ron::from_str(text).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    pub fn build(&self) -> CollisionVolume {
        self.build_with(&mut LogSink)
    }

    pub fn build_with(&self, sink: &mut dyn DiagnosticSink) -> CollisionVolume {
        let (shape, parsed_axis) = classify_shape(&self.shape);
        let axis = self.axis.map(Axis::from_raw).unwrap_or(parsed_axis);

        CollisionVolume::from_classified(
            shape,
            axis,
            self.scales.unwrap_or(UNSET_AXIS_SCALES),
            self.offsets,
            TestType::from_raw(self.test),
            sink,
        )
    }

    /// Builds the volume for an object whose model has radius `radius`.
    ///
    /// Definitions without explicit scales end up as a uniform volume of
    /// that radius, the same way prototype clones are sized.
    pub fn build_for_radius(&self, radius: f32) -> CollisionVolume {
        self.build_for_radius_with(radius, &mut LogSink)
    }

    pub fn build_for_radius_with(
        &self,
        radius: f32,
        sink: &mut dyn DiagnosticSink,
    ) -> CollisionVolume {
        let prototype = self.build_with(sink);
        CollisionVolume::from_prototype_with(&prototype, radius, sink)
    }
}
