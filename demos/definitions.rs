use collision_volume::*;

const UNIT_DEFS: [(&str, &str, f32); 4] = [
    ("tank", r#"(shape: "box", scales: Some((30.0, 14.0, 40.0)), offsets: (0.0, 7.0, 0.0))"#, 22.0),
    ("tower", r#"(shape: "cylY", scales: Some((16.0, 60.0, 16.0)))"#, 31.0),
    ("scout", r#"(shape: "ellipsoid")"#, 9.5),
    ("wreck", r#"(shape: "footprint", scales: Some((-1.0, 8.0, 8.0)))"#, 12.0),
];

fn main() -> Result<(), DefinitionError> {
    for (name, text, model_radius) in UNIT_DEFS {
        let def = VolumeDefinition::from_ron(text)?;
        let volume = def.build_for_radius_with(model_radius, &mut NullSink);

        println!(
            "{name:>6}: {:?} scales={:?} radius={:.2} enabled={}",
            volume.volume_type(),
            volume.axis_scales(),
            volume.bounding_radius(),
            volume.is_enabled()
        );
    }
    Ok(())
}
