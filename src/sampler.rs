//! Sampled data behind the analytic charts and the pressure gauge.
//!
//! The generators return plain numbers and leave all styling to the renderer.

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::trace;

use crate::classifier::{PressureLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use crate::scene::piston_displacement;

/// Reference pressures, in pascals, drawn on the force against area chart.
pub const REFERENCE_PRESSURES: [f64; 5] = [10_000.0, 30_000.0, 50_000.0, 80_000.0, 100_000.0];
/// Upper end of the gauge and of the displacement chart in pascals.
pub const GAUGE_MAX: f64 = 120_000.0;
/// Baseline the gauge delta is measured against.
pub const GAUGE_REFERENCE: f64 = 50_000.0;

/// Ordered `(x, y)` samples of one chart line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampledCurve {
    /// Legend entry.
    pub name: String,
    /// Samples in ascending `x`.
    pub points: Vec<(f64, f64)>,
}

impl SampledCurve {
    /// Sample `f` at every value of `xs`.
    fn sample(name: impl Into<String>, xs: &Array1<f64>, f: impl Fn(f64) -> f64) -> Self {
        Self {
            name: name.into(),
            points: xs.iter().map(|&x| (x, f(x))).collect(),
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pressure field over a force and area grid, P = F / A.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurfaceSamples {
    /// Force axis in newtons.
    pub forces: Array1<f64>,
    /// Area axis in square metres.
    pub areas: Array1<f64>,
    /// Pressure in pascals; row `i` is `areas[i]`, column `j` is `forces[j]`.
    pub pressures: Array2<f64>,
}

/// Sample P = F / A over 50 forces in [100, 10000] N and 50 areas in [0.01, 2] m².
#[must_use]
pub fn surface_samples() -> SurfaceSamples {
    let forces = Array1::linspace(100.0, 10_000.0, 50);
    let areas = Array1::linspace(0.01, 2.0, 50);
    let pressures = Array2::from_shape_fn((areas.len(), forces.len()), |(i, j)| {
        forces[j] / areas[i]
    });
    trace!(shape = ?pressures.dim(), "sampled pressure surface");
    SurfaceSamples {
        forces,
        areas,
        pressures,
    }
}

/// Lines of F = P·A for the reference pressures plus the current pressure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForceAreaFamily {
    /// One curve per entry of [`REFERENCE_PRESSURES`], in the same order.
    pub references: Vec<SampledCurve>,
    /// Index into `references` of the reference matching the current decade, if any.
    pub highlighted: Option<usize>,
    /// Curve for the current pressure.
    pub current: SampledCurve,
}

/// Sample F = P·A over 100 areas in [0.1, 2] m².
///
/// # Examples
/// ```
/// use hydrolab::force_vs_area_family;
///
/// let family = force_vs_area_family(55_000.0);
/// assert_eq!(family.references.len(), 5);
/// assert_eq!(family.highlighted, Some(2));
/// assert_eq!(family.current.name, "Current: 55000 Pa");
/// ```
#[must_use]
pub fn force_vs_area_family(current_pressure: f64) -> ForceAreaFamily {
    let areas = Array1::linspace(0.1, 2.0, 100);
    let references = REFERENCE_PRESSURES
        .iter()
        .map(|&pressure| {
            SampledCurve::sample(
                format!("P = {} Pa", group_thousands(pressure)),
                &areas,
                |area| pressure * area,
            )
        })
        .collect();
    let decade = (current_pressure / 10_000.0).floor() * 10_000.0;
    let highlighted = REFERENCE_PRESSURES
        .iter()
        .position(|&pressure| pressure == decade);
    let current = SampledCurve::sample(
        format!("Current: {current_pressure:.0} Pa"),
        &areas,
        |area| current_pressure * area,
    );
    trace!(current_pressure, ?highlighted, "sampled force family");
    ForceAreaFamily {
        references,
        highlighted,
        current,
    }
}

/// Input and output piston travel against pressure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplacementCurves {
    /// Downward travel of the input piston.
    pub input: SampledCurve,
    /// Upward travel of the output piston, negative.
    pub output: SampledCurve,
}

/// Sample piston travel over 100 pressures in [0, 120000] Pa.
#[must_use]
pub fn displacement_vs_pressure() -> DisplacementCurves {
    let pressures = Array1::linspace(0.0, GAUGE_MAX, 100);
    DisplacementCurves {
        input: SampledCurve::sample("Input Piston (↓ Down)", &pressures, |p| {
            piston_displacement(p).0
        }),
        output: SampledCurve::sample("Output Piston (↑ Up)", &pressures, |p| {
            piston_displacement(p).1
        }),
    }
}

/// Current piston positions, placed on the curves of [`displacement_vs_pressure`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DisplacementMarker {
    /// `(pressure, travel)` of the input piston.
    pub input: (f64, f64),
    /// `(pressure, travel)` of the output piston.
    pub output: (f64, f64),
}

/// Locate the pistons at `pressure` on the displacement chart.
#[must_use]
pub fn displacement_marker(pressure: f64) -> DisplacementMarker {
    let (small, large) = piston_displacement(pressure);
    DisplacementMarker {
        input: (pressure, small),
        output: (pressure, large),
    }
}

/// Coloured range on the gauge dial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GaugeBand {
    /// Level the band represents.
    pub level: PressureLevel,
    /// Lower end in pascals.
    pub start: f64,
    /// Upper end in pascals.
    pub end: f64,
    /// Fill colour.
    pub color: &'static str,
}

/// Everything a renderer needs to draw the pressure gauge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeConfig {
    /// Pressure shown by the needle and the number.
    pub value: f64,
    /// Dial range in pascals.
    pub range: (f64, f64),
    /// Level of `value`.
    pub level: PressureLevel,
    /// Bar colour for `value`.
    pub bar_color: &'static str,
    /// One band per level, lowest first.
    pub bands: Vec<GaugeBand>,
    /// Threshold marker position.
    pub threshold: f64,
    /// Baseline for the delta readout.
    pub reference: f64,
    /// `value` minus `reference`.
    pub delta: f64,
}

/// Gauge bands, bar colour and delta baseline for `pressure`.
///
/// # Examples
/// ```
/// use hydrolab::gauge_config;
///
/// let gauge = gauge_config(65_000.0);
/// assert_eq!(gauge.bar_color, "#4682B4");
/// assert_eq!(gauge.delta, 15_000.0);
/// ```
#[must_use]
pub fn gauge_config(pressure: f64) -> GaugeConfig {
    let edges = [0.0, MEDIUM_THRESHOLD, HIGH_THRESHOLD, GAUGE_MAX];
    let bands = PressureLevel::ALL
        .iter()
        .zip(edges.windows(2))
        .map(|(&level, edge)| GaugeBand {
            level,
            start: edge[0],
            end: edge[1],
            color: level.hex_color(),
        })
        .collect();
    let level = PressureLevel::classify(pressure);
    GaugeConfig {
        value: pressure,
        range: (0.0, GAUGE_MAX),
        level,
        bar_color: level.hex_color(),
        bands,
        threshold: pressure,
        reference: GAUGE_REFERENCE,
        delta: pressure - GAUGE_REFERENCE,
    }
}

/// Format a whole number of pascals with comma thousands separators.
fn group_thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
