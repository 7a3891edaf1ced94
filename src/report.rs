use hydrolab::{InputError, RenderFrame, ResolutionResult};
use std::fmt::Write;

/// Render a textual summary of a solver run and the frame drawn afterwards.
///
/// `outcome` is `None` when no field was filled in at all.
#[must_use]
pub fn render_report(
    input_errors: &[InputError],
    outcome: Option<&ResolutionResult>,
    frame: &RenderFrame,
) -> String {
    let mut output = String::new();

    // Field problems come first; the offending fields were treated as blank.
    for error in input_errors {
        writeln!(&mut output, "Input ignored: {error}").expect("writing to string cannot fail");
    }

    match outcome {
        Some(Ok(resolution)) => {
            writeln!(&mut output, "{}", resolution.message)
                .expect("writing to string cannot fail");
            writeln!(
                &mut output,
                "Force = {:.2} N, Area = {:.4} m², Pressure = {:.2} Pa",
                resolution.force, resolution.area, resolution.pressure
            )
            .expect("writing to string cannot fail");
            let level = hydrolab::classify(resolution.pressure);
            writeln!(
                &mut output,
                "Pressure level: {level} ({})",
                level.color_name()
            )
            .expect("writing to string cannot fail");
        }
        Some(Err(error)) => {
            writeln!(&mut output, "Cannot solve: {error}").expect("writing to string cannot fail");
        }
        None => output.push_str("Fill in any two of force, area and pressure to solve.\n"),
    }

    // Everything below is drawn from the one stored pressure.
    writeln!(
        &mut output,
        "Current pressure: {:.0} Pa - {} ({})",
        frame.pressure.pascals(),
        frame.level,
        frame.level.color_name()
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Lift: input piston {:+} px, output piston {:+} px",
        frame.lift.small_piston_offset, frame.lift.large_piston_offset
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Press: {} - {}",
        frame.press.state_label,
        frame.level.press_description()
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Gauge: {:+.0} Pa against {:.0} Pa",
        frame.gauge.delta, frame.gauge.reference
    )
    .expect("writing to string cannot fail");

    output
}
