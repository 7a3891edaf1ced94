//! One immutable pressure value per render pass, and everything drawn from it.
//!
//! A front end captures a [`PressureSnapshot`] once per interaction and hands it
//! to [`RenderFrame::capture`]. Every diagram, chart and gauge in the frame is then
//! derived from the same value and cannot disagree with the others.

use serde::Serialize;
use tracing::debug;

use crate::classifier::PressureLevel;
use crate::sampler::{
    displacement_marker, displacement_vs_pressure, force_vs_area_family, gauge_config,
    DisplacementCurves, DisplacementMarker, ForceAreaFamily, GaugeConfig, GAUGE_MAX,
};
use crate::scene::{LiftScene, PressScene};

/// Pressure shown before anything has been solved.
pub const DEFAULT_PRESSURE: f64 = 50_000.0;
/// Granularity of stored pressures in pascals.
pub const SNAPSHOT_STEP: f64 = 1_000.0;

/// Pressure captured for a single render pass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PressureSnapshot(f64);

impl PressureSnapshot {
    /// Capture `pressure` as is.
    #[must_use]
    pub const fn new(pressure: f64) -> Self {
        Self(pressure)
    }

    /// Capture a solved pressure the way the slider stores it.
    ///
    /// The value is rounded half up to the nearest [`SNAPSHOT_STEP`] and clamped
    /// to `[0, 120000]` Pa.
    ///
    /// # Examples
    /// ```
    /// use hydrolab::PressureSnapshot;
    ///
    /// assert_eq!(PressureSnapshot::from_solved(33_333.33).pascals(), 33_000.0);
    /// assert_eq!(PressureSnapshot::from_solved(33_500.0).pascals(), 34_000.0);
    /// assert_eq!(PressureSnapshot::from_solved(1.0e6).pascals(), 120_000.0);
    /// ```
    #[must_use]
    pub fn from_solved(pressure: f64) -> Self {
        Self::quantized(pressure, SNAPSHOT_STEP, GAUGE_MAX)
    }

    /// Round half up to a multiple of `step` and clamp to `[0, max]`.
    #[must_use]
    pub fn quantized(pressure: f64, step: f64, max: f64) -> Self {
        let rounded = ((pressure + step / 2.0) / step).floor() * step;
        Self(rounded.clamp(0.0, max))
    }

    /// Captured pressure in pascals.
    #[must_use]
    pub const fn pascals(self) -> f64 {
        self.0
    }
}

impl Default for PressureSnapshot {
    fn default() -> Self {
        Self(DEFAULT_PRESSURE)
    }
}

/// All visual state derived from one [`PressureSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderFrame {
    /// The pressure every other field was computed from.
    pub pressure: PressureSnapshot,
    /// Regime of `pressure`.
    pub level: PressureLevel,
    /// Hydraulic lift diagram.
    pub lift: LiftScene,
    /// Hydraulic press diagram.
    pub press: PressScene,
    /// Gauge dial.
    pub gauge: GaugeConfig,
    /// Force against area chart.
    pub force_family: ForceAreaFamily,
    /// Piston displacement chart.
    pub displacement: DisplacementCurves,
    /// Current position on the displacement chart.
    pub marker: DisplacementMarker,
}

impl RenderFrame {
    /// Derive every scene and chart from `snapshot`.
    #[must_use]
    pub fn capture(snapshot: PressureSnapshot) -> Self {
        let pressure = snapshot.pascals();
        let level = PressureLevel::classify(pressure);
        debug!(pressure, %level, "capturing render frame");
        Self {
            pressure: snapshot,
            level,
            lift: LiftScene::new(pressure),
            press: PressScene::new(pressure),
            gauge: gauge_config(pressure),
            force_family: force_vs_area_family(pressure),
            displacement: displacement_vs_pressure(),
            marker: displacement_marker(pressure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_fifty_kilopascal() {
        assert_eq!(PressureSnapshot::default().pascals(), 50_000.0);
    }

    #[test]
    fn solved_pressure_is_rounded_and_clamped() {
        assert_eq!(PressureSnapshot::from_solved(0.0).pascals(), 0.0);
        assert_eq!(PressureSnapshot::from_solved(499.99).pascals(), 0.0);
        assert_eq!(PressureSnapshot::from_solved(500.0).pascals(), 1_000.0);
        assert_eq!(PressureSnapshot::from_solved(79_600.0).pascals(), 80_000.0);
        assert_eq!(PressureSnapshot::from_solved(120_499.0).pascals(), 120_000.0);
        assert_eq!(PressureSnapshot::from_solved(-3_000.0).pascals(), 0.0);
    }

    #[test]
    fn frame_parts_agree_on_pressure() {
        let frame = RenderFrame::capture(PressureSnapshot::new(85_000.0));
        assert_eq!(frame.level, PressureLevel::High);
        assert_eq!(frame.lift.level, frame.level);
        assert_eq!(frame.press.level, frame.level);
        assert_eq!(frame.gauge.level, frame.level);
        assert_eq!(frame.lift.fluid_color, frame.gauge.bar_color);
        assert_eq!(frame.gauge.value, 85_000.0);
        assert_eq!(frame.marker.input.0, 85_000.0);
        assert_eq!(frame.force_family.highlighted, Some(3));
    }

    #[test]
    fn frames_are_reproducible() {
        let snapshot = PressureSnapshot::new(55_000.0);
        assert_eq!(RenderFrame::capture(snapshot), RenderFrame::capture(snapshot));
    }
}
