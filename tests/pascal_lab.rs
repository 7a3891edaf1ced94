#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use hydrolab::{
    classify, displacement_marker, displacement_vs_pressure, gauge_config, lift_scene,
    press_scene, resolve, PhysicalTriple, PressureLevel, PressureSnapshot, RenderFrame,
    ResolutionError,
};

/// Force, area and pressure combinations a student might try.
const CASES: [(f64, f64); 5] = [
    (0.1, 50_000.0),
    (0.25, 8_000.0),
    (1.5, 20_000.0),
    (2.0, 99_000.0),
    (0.004, 120_000.0),
];

#[test]
fn solves_each_missing_quantity() {
    for &(area, pressure) in &CASES {
        let force = pressure * area;

        let solved = resolve(None, Some(area), Some(pressure)).expect("force derivable");
        assert_eq!(solved.force, pressure * area);

        let solved = resolve(Some(force), None, Some(pressure)).expect("area derivable");
        assert_eq!(solved.area, force / pressure);

        let solved = resolve(Some(force), Some(area), None).expect("pressure derivable");
        assert_eq!(solved.pressure, force / area);
    }
}

#[test]
fn round_trip_recovers_pressure() {
    for &(area, pressure) in &CASES {
        let first = resolve(None, Some(area), Some(pressure)).expect("force derivable");
        let second = resolve(Some(first.force), Some(area), None).expect("pressure derivable");
        assert_relative_eq!(second.pressure, pressure, max_relative = 1.0e-9);
    }
}

#[test]
fn underdetermined_and_zero_divisor_inputs_are_rejected() {
    assert_eq!(
        resolve(Some(5.0), None, None),
        Err(ResolutionError::Underdetermined)
    );
    assert_eq!(
        resolve(None, None, None),
        Err(ResolutionError::Underdetermined)
    );
    let error = resolve(Some(10.0), Some(0.0), None).expect_err("zero area");
    assert_eq!(error.reason(), "area must be > 0");
}

#[test]
fn mismatched_triple_is_accepted_as_supplied() {
    let triple = PhysicalTriple::new(Some(100.0), Some(2.0), Some(1.0));
    let resolution = triple.resolve().expect("all three present");
    assert_eq!(PhysicalTriple::from(&resolution), triple);
}

#[test]
fn end_to_end_area_example() {
    let resolution = resolve(Some(5_000.0), None, Some(50_000.0)).expect("area derivable");
    assert_eq!(resolution.force, 5_000.0);
    assert_eq!(resolution.area, 0.1);
    assert_eq!(resolution.pressure, 50_000.0);
    assert_eq!(resolution.message, "Calculated Area: 0.1000 m²");

    assert_eq!(classify(50_000.0), PressureLevel::Medium);
    let scene = lift_scene(50_000.0);
    assert_eq!(scene.small_piston_offset, 15);
    assert_eq!(scene.large_piston_offset, -20);
}

#[test]
fn classifier_boundaries() {
    assert_eq!(classify(19_999.99), PressureLevel::Low);
    assert_eq!(classify(20_000.0), PressureLevel::Medium);
    assert_eq!(classify(79_999.99), PressureLevel::Medium);
    assert_eq!(classify(80_000.0), PressureLevel::High);
}

#[test]
fn lift_scene_saturates_at_one_hundred_kilopascal() {
    assert_eq!(lift_scene(0.0).small_piston_offset, 0);
    assert_eq!(lift_scene(100_000.0).small_piston_offset, 30);
    let saturated = lift_scene(100_000.0);
    for &pressure in &[100_001.0, 110_000.0, 1.0e7] {
        let scene = lift_scene(pressure);
        assert_eq!(scene.small_piston_offset, saturated.small_piston_offset);
        assert_eq!(scene.large_piston_offset, saturated.large_piston_offset);
        assert_eq!(scene.fluid, saturated.fluid);
        assert_eq!(scene.small_piston, saturated.small_piston);
        assert_eq!(scene.large_piston, saturated.large_piston);
    }
}

#[test]
fn medium_press_scene_is_uniform_and_deterministic() {
    for step in 0..60 {
        let scene = press_scene(20_000.0 + f64::from(step) * 1_000.0);
        assert_eq!(scene.box_compression, 15);
        assert_eq!(scene.state_label, "Strong Press");
    }
    assert_eq!(
        press_scene(55_000.0).shake_offset,
        press_scene(55_000.0).shake_offset
    );
}

#[test]
fn charts_and_scenes_share_one_pressure() {
    let snapshot = PressureSnapshot::from_solved(
        resolve(Some(9_000.0), Some(0.1), None)
            .expect("pressure derivable")
            .pressure,
    );
    assert_eq!(snapshot.pascals(), 90_000.0);

    let frame = RenderFrame::capture(snapshot);
    assert_eq!(frame.level, PressureLevel::High);
    assert_eq!(frame.press.crush_marks.len(), 5);
    assert_eq!(frame.gauge, gauge_config(90_000.0));
    assert_eq!(frame.marker, displacement_marker(90_000.0));
    assert_eq!(frame.displacement, displacement_vs_pressure());
    assert_relative_eq!(frame.marker.input.1, 27.0, max_relative = 1.0e-12);
    assert_eq!(frame.lift.small_piston_offset, 27);
}
