use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::types::{Axis, TestType, VolumeType};
use crate::collision::classify::classify_shape;
use crate::config::{
    DEFAULT_AXIS_SCALES, MIN_AXIS_SCALE, SPHERE_PROMOTION_EPSILON, UNSET_AXIS_SCALES,
};
use crate::utils::logging::{DiagnosticSink, LogSink, VolumeEvent};

/// Axis-aligned collision volume attached to one simulated object.
///
/// The volume only describes the shape: its full extents, the derived
/// half-extent tables, an offset from the owner's origin, and an enclosing
/// sphere for early-out pruning. Overlap tests live elsewhere and read these
/// fields through the accessors.
///
/// Every mutating operation leaves the derived fields consistent with
/// `axis_scales` before it returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionVolume {
    axis_scales: Vec3,
    axis_h_scales: Vec3,
    axis_h_scales_sq: Vec3,
    axis_h_i_scales: Vec3,
    axis_offsets: Vec3,
    volume_bounding_radius: f32,
    volume_bounding_radius_sq: f32,
    volume_type: VolumeType,
    test_type: TestType,
    primary_axis: Axis,
    secondary_axes: [Axis; 2],
    disabled: bool,
}

impl Default for CollisionVolume {
    /// A 2x2x2 placeholder.
    ///
    /// Fields are assigned directly rather than through [`Self::init`], so
    /// the uniform scale does not promote this ellipsoid to a sphere.
    fn default() -> Self {
        let half = DEFAULT_AXIS_SCALES * 0.5;
        Self {
            axis_scales: DEFAULT_AXIS_SCALES,
            axis_h_scales: half,
            axis_h_scales_sq: half * half,
            axis_h_i_scales: Vec3::ONE / half,
            axis_offsets: Vec3::ZERO,
            volume_bounding_radius: half.x,
            volume_bounding_radius_sq: half.x * half.x,
            volume_type: VolumeType::Ellipsoid,
            test_type: TestType::Discrete,
            primary_axis: Axis::Z,
            secondary_axes: Axis::Z.complement(),
            disabled: false,
        }
    }
}

impl CollisionVolume {
    /// Copies a prototype volume for a live object.
    ///
    /// When the prototype never had explicit scales and `default_radius` is
    /// positive, the copy is resized to a uniform volume of that radius.
    pub fn from_prototype(prototype: &Self, default_radius: f32) -> Self {
        Self::from_prototype_with(prototype, default_radius, &mut LogSink)
    }

    pub fn from_prototype_with(
        prototype: &Self,
        default_radius: f32,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut volume = prototype.clone();
        if volume.has_unset_scales() && default_radius > 0.0 {
            volume.set_default_scale_with(default_radius, sink);
        }
        volume
    }

    /// Builds a volume from a textual shape descriptor such as `"box"` or
    /// `"cylY"`. See [`classify_shape`] for how the text is read.
    pub fn from_descriptor(descriptor: &str, scales: Vec3, offsets: Vec3, test: i32) -> Self {
        Self::from_descriptor_with(descriptor, scales, offsets, test, &mut LogSink)
    }

    pub fn from_descriptor_with(
        descriptor: &str,
        scales: Vec3,
        offsets: Vec3,
        test: i32,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let (shape, axis) = classify_shape(descriptor);
        Self::from_classified(shape, axis, scales, offsets, TestType::from_raw(test), sink)
    }

    pub(crate) fn from_classified(
        shape: VolumeType,
        axis: Axis,
        scales: Vec3,
        offsets: Vec3,
        test: TestType,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        sink.emit(VolumeEvent::Created(shape));

        let mut volume = Self::default();
        volume.init_with(scales, offsets, shape, test, axis, sink);
        volume
    }

    /// Reinitializes every field from raw definition values.
    ///
    /// `shape`, `test` and `axis` are brought into range as
    /// `max(0, value) % count` before use.
    pub fn init_raw(&mut self, scales: Vec3, offsets: Vec3, shape: i32, test: i32, axis: i32) {
        self.init(
            scales,
            offsets,
            VolumeType::from_raw(shape),
            TestType::from_raw(test),
            Axis::from_raw(axis),
        );
    }

    pub fn init(
        &mut self,
        scales: Vec3,
        offsets: Vec3,
        shape: VolumeType,
        test: TestType,
        axis: Axis,
    ) {
        self.init_with(scales, offsets, shape, test, axis, &mut LogSink);
    }

    /// Reinitializes every field.
    ///
    /// A negative scale component marks the volume disabled: it stays
    /// configured but collision detection should skip it. Scale components
    /// are floored to [`MIN_AXIS_SCALE`] before the derived tables are built,
    /// so a result of all ones means "take the size from the model later".
    pub fn init_with(
        &mut self,
        scales: Vec3,
        offsets: Vec3,
        shape: VolumeType,
        test: TestType,
        axis: Axis,
        sink: &mut dyn DiagnosticSink,
    ) {
        self.primary_axis = axis;
        self.volume_type = shape;
        self.test_type = test;

        self.disabled = scales.cmplt(Vec3::ZERO).any();
        self.axis_offsets = offsets;

        let floored = scales.max(Vec3::splat(MIN_AXIS_SCALE));
        self.set_axis_scales(floored.x, floored.y, floored.z);

        if self.volume_type == VolumeType::Ellipsoid && self.has_uniform_half_scales() {
            sink.emit(VolumeEvent::PromotedToSphere);
            self.volume_type = VolumeType::Sphere;
        }

        self.secondary_axes = self.primary_axis.complement();
        self.set_bounding_radius();
    }

    /// Resizes to a uniform volume of the given radius around the owner's
    /// origin, keeping shape, test kind and primary axis.
    pub fn set_default_scale(&mut self, radius: f32) {
        self.set_default_scale_with(radius, &mut LogSink);
    }

    pub fn set_default_scale_with(&mut self, radius: f32, sink: &mut dyn DiagnosticSink) {
        let scales = Vec3::splat(radius * 2.0);
        self.init_with(
            scales,
            Vec3::ZERO,
            self.volume_type,
            self.test_type,
            self.primary_axis,
            sink,
        );
    }

    /// Assigns full extents and rebuilds the half-extent tables.
    ///
    /// No component may be zero; the reciprocal table is not guarded.
    /// The bounding radius is left alone, callers recompute it.
    pub fn set_axis_scales(&mut self, x: f32, y: f32, z: f32) {
        self.axis_scales = Vec3::new(x, y, z);
        self.axis_h_scales = self.axis_scales * 0.5;
        self.axis_h_scales_sq = self.axis_h_scales * self.axis_h_scales;
        self.axis_h_i_scales = Vec3::ONE / self.axis_h_scales;
    }

    /// Multiplies the current extents per axis without reinitializing.
    ///
    /// Shape, axes, offsets and the disabled flag are untouched. An
    /// ellipsoid that becomes uniform here is not promoted.
    pub fn rescale_axes(&mut self, x: f32, y: f32, z: f32) {
        let factors = Vec3::new(x, y, z);

        self.axis_scales *= factors;
        self.axis_h_scales *= factors;
        self.axis_h_scales_sq *= factors * factors;
        self.axis_h_i_scales *= Vec3::ONE / factors;

        self.set_bounding_radius();
    }

    /// Recomputes the enclosing-sphere radius for the current shape.
    pub fn set_bounding_radius(&mut self) {
        match self.volume_type {
            VolumeType::Box => {
                self.volume_bounding_radius_sq = self.axis_h_scales_sq.element_sum();
                self.volume_bounding_radius = self.volume_bounding_radius_sq.sqrt();
            }
            VolumeType::Cylinder => {
                let [a, b] = self.secondary_axes;
                let primary = self.axis_half_scale(self.primary_axis);
                let secondary = self.axis_half_scale(a).max(self.axis_half_scale(b));

                self.volume_bounding_radius_sq = primary * primary + secondary * secondary;
                self.volume_bounding_radius = self.volume_bounding_radius_sq.sqrt();
            }
            VolumeType::Ellipsoid => {
                self.volume_bounding_radius = self.axis_h_scales.max_element();
                self.volume_bounding_radius_sq =
                    self.volume_bounding_radius * self.volume_bounding_radius;
            }
            // A footprint is clipped by its sphere, so it shares the sphere bound.
            VolumeType::Sphere | VolumeType::Footprint => {
                self.volume_bounding_radius = self.axis_h_scales.x;
                self.volume_bounding_radius_sq =
                    self.volume_bounding_radius * self.volume_bounding_radius;
            }
        }
    }

    fn has_uniform_half_scales(&self) -> bool {
        let h = self.axis_h_scales;
        (h.x - h.y).abs() < SPHERE_PROMOTION_EPSILON
            && (h.y - h.z).abs() < SPHERE_PROMOTION_EPSILON
    }

    /// True when the scales are still the placeholder left by a definition
    /// that never set any.
    pub fn has_unset_scales(&self) -> bool {
        self.axis_scales == UNSET_AXIS_SCALES
    }

    pub fn axis_half_scale(&self, axis: Axis) -> f32 {
        self.axis_h_scales[axis.index()]
    }

    pub fn axis_scales(&self) -> Vec3 {
        self.axis_scales
    }

    pub fn axis_half_scales(&self) -> Vec3 {
        self.axis_h_scales
    }

    pub fn axis_half_scales_sq(&self) -> Vec3 {
        self.axis_h_scales_sq
    }

    /// Reciprocal half-extents, used to normalize points into unit space.
    pub fn axis_inv_half_scales(&self) -> Vec3 {
        self.axis_h_i_scales
    }

    pub fn axis_offsets(&self) -> Vec3 {
        self.axis_offsets
    }

    pub fn bounding_radius(&self) -> f32 {
        self.volume_bounding_radius
    }

    pub fn bounding_radius_sq(&self) -> f32 {
        self.volume_bounding_radius_sq
    }

    pub fn volume_type(&self) -> VolumeType {
        self.volume_type
    }

    pub fn test_type(&self) -> TestType {
        self.test_type
    }

    pub fn primary_axis(&self) -> Axis {
        self.primary_axis
    }

    pub fn secondary_axes(&self) -> [Axis; 2] {
        self.secondary_axes
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
