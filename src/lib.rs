#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod classifier;
mod errors;
mod quantities;
mod sampler;
mod scene;
mod snapshot;
mod solver;

pub use classifier::{classify, PressureLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use errors::{InputError, Quantity, ResolutionError};
pub use quantities::{label, Label, PhysicalTriple, Rect, Resolution, Segment};
pub use sampler::{
    displacement_marker, displacement_vs_pressure, force_vs_area_family, gauge_config,
    surface_samples, DisplacementCurves, DisplacementMarker, ForceAreaFamily, GaugeBand,
    GaugeConfig, SampledCurve, SurfaceSamples, GAUGE_MAX, GAUGE_REFERENCE, REFERENCE_PRESSURES,
};
pub use scene::{
    lift_scene, piston_displacement, press_scene, pressure_factor, Canvas, LiftScene,
    PressScene, BACKGROUND, CRUSH_MARK_COUNT, LIFT_CANVAS, LARGE_PISTON_TRAVEL, PRESS_CANVAS,
    SATURATION_PRESSURE, SMALL_PISTON_TRAVEL,
};
pub use snapshot::{PressureSnapshot, RenderFrame, DEFAULT_PRESSURE, SNAPSHOT_STEP};
pub use solver::{resolve, ResolutionResult};

/// Parse one raw text field into an optional solver input.
///
/// Blank text means the quantity is unknown. Anything else must be a finite,
/// non-negative number.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for unparsable text and
/// [`InputError::Negative`] for values below zero.
///
/// # Examples
/// ```
/// use hydrolab::{parse_input, InputError, Quantity};
///
/// assert_eq!(parse_input("  ", Quantity::Force), Ok(None));
/// assert_eq!(parse_input("2.5", Quantity::Area), Ok(Some(2.5)));
/// assert!(matches!(
///     parse_input("-1", Quantity::Pressure),
///     Err(InputError::Negative { .. })
/// ));
/// ```
pub fn parse_input(raw: &str, quantity: Quantity) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            quantity,
            raw: raw.to_owned(),
        })?;
    if value < 0.0 {
        return Err(InputError::Negative { quantity, value });
    }
    Ok(Some(value))
}
