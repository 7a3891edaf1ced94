use hydrolab::{PressureSnapshot, RenderFrame};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for pressure in [10_000.0, 55_000.0, 95_000.0] {
        let frame = RenderFrame::capture(PressureSnapshot::new(pressure));
        println!(
            "{:>6.0} Pa: {} lift {:+}/{:+} press \"{}\" marks {}",
            pressure,
            frame.level,
            frame.lift.small_piston_offset,
            frame.lift.large_piston_offset,
            frame.press.state_label,
            frame.press.crush_marks.len()
        );
    }

    let frame = RenderFrame::capture(PressureSnapshot::default());
    println!("{}", serde_json::to_string(&frame.gauge)?);

    Ok(())
}
