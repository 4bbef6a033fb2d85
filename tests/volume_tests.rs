use approx::assert_relative_eq;
use collision_volume::*;

fn init(scales: Vec3, shape: VolumeType, axis: Axis) -> CollisionVolume {
    let mut volume = CollisionVolume::default();
    volume.init_with(scales, Vec3::ZERO, shape, TestType::Discrete, axis, &mut NullSink);
    volume
}

#[test]
fn classification_examples() {
    assert_eq!(classify_shape("ellipsoid"), (VolumeType::Ellipsoid, Axis::Z));
    assert_eq!(classify_shape("cylx"), (VolumeType::Cylinder, Axis::X));
    assert_eq!(classify_shape("cyly"), (VolumeType::Cylinder, Axis::Y));
    assert_eq!(classify_shape("box"), (VolumeType::Box, Axis::Z));
    assert_eq!(classify_shape(""), (VolumeType::Footprint, Axis::Z));
    assert_eq!(classify_shape("garbage"), (VolumeType::Footprint, Axis::Z));
}

#[test]
fn half_scale_tables_hold_for_positive_scales() {
    let samples = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.5, 22.0, 3.25),
        Vec3::new(100.0, 7.0, 64.0),
    ];
    for scales in samples {
        let volume = init(scales, VolumeType::Box, Axis::Z);
        let half = volume.axis_half_scales();

        assert_relative_eq!(half.x, scales.x * 0.5);
        assert_relative_eq!(half.y, scales.y * 0.5);
        assert_relative_eq!(half.z, scales.z * 0.5);
        assert_relative_eq!(volume.axis_half_scales_sq().y, half.y * half.y);
        assert_relative_eq!(volume.axis_inv_half_scales().z, 1.0 / half.z);
    }
}

#[test]
fn ellipsoid_promotion_depends_on_uniform_scale() {
    assert_eq!(
        init(Vec3::splat(4.0), VolumeType::Ellipsoid, Axis::Z).volume_type(),
        VolumeType::Sphere
    );
    assert_eq!(
        init(Vec3::new(4.0, 4.0, 5.0), VolumeType::Ellipsoid, Axis::Z).volume_type(),
        VolumeType::Ellipsoid
    );
}

#[test]
fn disabled_flag_follows_scale_sign() {
    assert!(init(Vec3::new(-1.0, 2.0, 2.0), VolumeType::Box, Axis::Z).is_disabled());
    assert!(!init(Vec3::splat(2.0), VolumeType::Box, Axis::Z).is_disabled());
}

#[test]
fn bounding_radius_per_shape() {
    let cube = init(Vec3::splat(2.0), VolumeType::Box, Axis::Z);
    assert_relative_eq!(cube.bounding_radius(), 3.0_f32.sqrt());

    let cylinder = init(Vec3::new(2.0, 2.0, 4.0), VolumeType::Cylinder, Axis::Z);
    assert_relative_eq!(cylinder.bounding_radius(), 5.0_f32.sqrt());

    let ellipsoid = init(Vec3::new(2.0, 9.0, 4.0), VolumeType::Ellipsoid, Axis::Z);
    assert_relative_eq!(ellipsoid.bounding_radius(), 4.5);

    for volume in [cube, cylinder, ellipsoid] {
        assert_relative_eq!(
            volume.bounding_radius_sq(),
            volume.bounding_radius() * volume.bounding_radius(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn rescale_agrees_with_fresh_init() {
    for shape in [VolumeType::Ellipsoid, VolumeType::Box, VolumeType::Cylinder] {
        let mut volume = init(Vec3::splat(2.0), shape, Axis::Z);
        volume.rescale_axes(2.0, 2.0, 2.0);
        let fresh = init(Vec3::splat(4.0), shape, Axis::Z);

        assert_eq!(volume.axis_scales(), Vec3::splat(4.0));
        assert_eq!(volume.volume_type(), fresh.volume_type());
        assert_relative_eq!(volume.bounding_radius(), fresh.bounding_radius());
        assert_relative_eq!(volume.bounding_radius_sq(), fresh.bounding_radius_sq());
    }
}

#[test]
fn secondary_axes_follow_primary_regardless_of_history() {
    let expected = [
        (Axis::X, [Axis::Y, Axis::Z]),
        (Axis::Y, [Axis::X, Axis::Z]),
        (Axis::Z, [Axis::X, Axis::Y]),
    ];
    let mut volume = init(Vec3::new(2.0, 3.0, 4.0), VolumeType::Cylinder, Axis::X);
    for _ in 0..2 {
        for (primary, secondary) in expected {
            volume.init_with(
                Vec3::new(2.0, 3.0, 4.0),
                Vec3::ZERO,
                VolumeType::Cylinder,
                TestType::Discrete,
                primary,
                &mut NullSink,
            );
            assert_eq!(volume.secondary_axes(), secondary);
        }
    }
}

#[test]
fn descriptor_construction_reports_shape() {
    let mut events = Vec::new();
    let volume = CollisionVolume::from_descriptor_with(
        "CYLX",
        Vec3::new(10.0, 4.0, 6.0),
        Vec3::new(0.0, 2.0, 0.0),
        -5,
        &mut events,
    );

    assert_eq!(events, vec![VolumeEvent::Created(VolumeType::Cylinder)]);
    assert_eq!(volume.primary_axis(), Axis::X);
    assert_eq!(volume.test_type(), TestType::Discrete);
    assert_relative_eq!(volume.bounding_radius_sq(), 25.0 + 9.0);
}

#[test]
fn clones_are_independent() {
    let prototype = init(Vec3::new(3.0, 4.0, 5.0), VolumeType::Box, Axis::Z);
    let mut clone = CollisionVolume::from_prototype_with(&prototype, 10.0, &mut NullSink);
    clone.rescale_axes(2.0, 2.0, 2.0);

    assert_eq!(prototype.axis_scales(), Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(clone.axis_scales(), Vec3::new(6.0, 8.0, 10.0));
}

#[test]
fn persisted_state_round_trips_verbatim() {
    let mut volume = CollisionVolume::default();
    volume.init_raw(Vec3::new(-3.0, 5.0, 7.0), Vec3::new(1.0, 0.5, -2.0), 1, 1, 0);
    volume.rescale_axes(1.5, 1.0, 0.25);

    let text = ron::to_string(&volume).expect("volume should serialize");
    let restored: CollisionVolume = ron::from_str(&text).expect("volume should deserialize");
    assert_eq!(restored, volume);

    let placeholder: CollisionVolume =
        ron::from_str(&ron::to_string(&CollisionVolume::default()).expect("serialize"))
            .expect("deserialize");
    assert_eq!(placeholder.volume_type(), VolumeType::Ellipsoid);
}
