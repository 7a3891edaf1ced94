//! Pixel geometry of the hydraulic lift and hydraulic press diagrams.
//!
//! Every scene is a pure function of a single pressure value, so drawing the same
//! pressure twice always produces the same picture. Coordinates use screen space
//! with the origin at the top-left corner and `y` growing downwards.

use serde::Serialize;
use tracing::trace;

use crate::classifier::PressureLevel;
use crate::quantities::{label, Label, Rect, Segment};

/// Pressure, in pascals, at which piston travel saturates.
pub const SATURATION_PRESSURE: f64 = 100_000.0;
/// Full downward travel of the input piston in pixels.
pub const SMALL_PISTON_TRAVEL: f64 = 30.0;
/// Full upward travel of the output piston in pixels.
pub const LARGE_PISTON_TRAVEL: f64 = 40.0;

/// Background colour shared by both diagrams.
pub const BACKGROUND: &str = "#1E1E1E";

/// Size of a drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// Canvas of the hydraulic lift diagram.
pub const LIFT_CANVAS: Canvas = Canvas {
    width: 600,
    height: 400,
};

/// Canvas of the hydraulic press diagram.
pub const PRESS_CANVAS: Canvas = Canvas {
    width: 400,
    height: 500,
};

/// Rest position of both lift pistons.
const PISTON_BASE_Y: i32 = 200;
/// Height of both lift pistons.
const PISTON_HEIGHT: i32 = 40;
/// Horizontal centre of the input piston.
const SMALL_PISTON_X: i32 = 150;
/// Horizontal centre of the output piston.
const LARGE_PISTON_X: i32 = 450;

/// Normalised pressure in `[0, 1]`, saturating at [`SATURATION_PRESSURE`].
///
/// # Examples
/// ```
/// use hydrolab::pressure_factor;
///
/// assert_eq!(pressure_factor(50_000.0), 0.5);
/// assert_eq!(pressure_factor(250_000.0), 1.0);
/// ```
#[must_use]
pub fn pressure_factor(pressure: f64) -> f64 {
    (pressure / SATURATION_PRESSURE).clamp(0.0, 1.0)
}

/// Unrounded displacement of the input and output pistons.
///
/// The input piston moves down (positive) and the output piston moves up
/// (negative). The lift scene rounds these values and the displacement chart
/// samples them directly, so a marker at a given pressure lies on the chart.
#[must_use]
pub fn piston_displacement(pressure: f64) -> (f64, f64) {
    let factor = pressure_factor(pressure);
    (SMALL_PISTON_TRAVEL * factor, -LARGE_PISTON_TRAVEL * factor)
}

/// Geometry of the two-piston hydraulic lift.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiftScene {
    /// Level the fluid colour was taken from.
    pub level: PressureLevel,
    /// Downward travel of the input piston.
    pub small_piston_offset: i32,
    /// Upward travel of the output piston, negative in screen space.
    pub large_piston_offset: i32,
    /// Top edge of the input piston.
    pub small_piston_y: i32,
    /// Top edge of the output piston.
    pub large_piston_y: i32,
    /// Top edge of the fluid band, just below the lower of the two pistons.
    pub fluid_top: i32,
    /// Bottom edge of the fluid band.
    pub fluid_bottom: i32,
    /// Fill colour of the fluid band.
    pub fluid_color: &'static str,
    /// Fluid band.
    pub fluid: Rect,
    /// Input piston head.
    pub small_piston: Rect,
    /// Input piston rod.
    pub small_rod: Rect,
    /// Output piston head.
    pub large_piston: Rect,
    /// Output piston rod.
    pub large_rod: Rect,
    /// Piston names and the pressure caption.
    pub labels: Vec<Label>,
}

impl LiftScene {
    /// Build the lift geometry for a non-negative pressure in pascals.
    ///
    /// # Examples
    /// ```
    /// use hydrolab::LiftScene;
    ///
    /// let scene = LiftScene::new(50_000.0);
    /// assert_eq!(scene.small_piston_offset, 15);
    /// assert_eq!(scene.large_piston_offset, -20);
    /// ```
    #[must_use]
    pub fn new(pressure: f64) -> Self {
        let level = PressureLevel::classify(pressure);
        let (small, large) = piston_displacement(pressure);
        let small_piston_offset = small.round() as i32;
        let large_piston_offset = -(large.abs().round() as i32);

        let small_piston_y = PISTON_BASE_Y + small_piston_offset;
        let large_piston_y = PISTON_BASE_Y + large_piston_offset;
        let fluid_top = (small_piston_y + PISTON_HEIGHT).max(large_piston_y + PISTON_HEIGHT);
        let fluid_bottom = LIFT_CANVAS.height - 50;

        let scene = Self {
            level,
            small_piston_offset,
            large_piston_offset,
            small_piston_y,
            large_piston_y,
            fluid_top,
            fluid_bottom,
            fluid_color: level.hex_color(),
            fluid: Rect::new(100, fluid_top, 500, fluid_bottom),
            small_piston: Rect::centered(
                SMALL_PISTON_X,
                30,
                small_piston_y,
                small_piston_y + PISTON_HEIGHT,
            ),
            small_rod: Rect::centered(SMALL_PISTON_X, 10, small_piston_y - 60, small_piston_y),
            large_piston: Rect::centered(
                LARGE_PISTON_X,
                60,
                large_piston_y,
                large_piston_y + PISTON_HEIGHT,
            ),
            large_rod: Rect::centered(LARGE_PISTON_X, 15, large_piston_y - 80, large_piston_y),
            labels: vec![
                label(SMALL_PISTON_X, small_piston_y - 80, "Input\nPiston"),
                label(LARGE_PISTON_X, large_piston_y - 100, "Output\nPiston"),
                label(
                    LIFT_CANVAS.width / 2,
                    fluid_top + 60,
                    format!("Pressure = {pressure:.0} Pa"),
                ),
            ],
        };
        trace!(pressure, ?level, fluid_top, "built lift scene");
        scene
    }
}

/// Build the lift geometry for a pressure. See [`LiftScene::new`].
#[must_use]
pub fn lift_scene(pressure: f64) -> LiftScene {
    LiftScene::new(pressure)
}

/// Deterministic horizontal jitter derived from the pressure residue.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Jitter {
    /// Modulus applied to the pressure.
    period: f64,
    /// Divisor applied to the residue before rounding.
    divisor: f64,
}

impl Jitter {
    /// Jitter in pixels for `pressure`.
    fn offset(self, pressure: f64) -> i32 {
        ((pressure % self.period) / self.divisor).round() as i32
    }
}

/// Constants that distinguish one press regime from another.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PressProfile {
    /// Downward travel of the ram from its rest position.
    piston_travel: i32,
    /// Shake applied to the whole press, if any.
    jitter: Option<Jitter>,
    /// How far the block is squashed from the top.
    box_compression: i32,
    /// Caption under the press.
    label: &'static str,
    /// Caption colour.
    color: &'static str,
    /// Whether crush marks are drawn across the block.
    crush_marks: bool,
}

/// Press profiles indexed by [`PressureLevel`].
const PRESS_PROFILES: [PressProfile; 3] = [
    PressProfile {
        piston_travel: 20,
        jitter: None,
        box_compression: 0,
        label: "Soft Press",
        color: "#87CEEB",
        crush_marks: false,
    },
    PressProfile {
        piston_travel: 80,
        jitter: Some(Jitter {
            period: 100.0,
            divisor: 20.0,
        }),
        box_compression: 15,
        label: "Strong Press",
        color: "#FFA500",
        crush_marks: false,
    },
    PressProfile {
        piston_travel: 150,
        jitter: Some(Jitter {
            period: 200.0,
            divisor: 30.0,
        }),
        box_compression: 40,
        label: "CRUSH FORCE!",
        color: "#FF0000",
        crush_marks: true,
    },
];

impl PressProfile {
    /// Profile for `level`.
    fn for_level(level: PressureLevel) -> &'static PressProfile {
        &PRESS_PROFILES[level as usize]
    }
}

/// Rest position of the ram head.
const RAM_BASE_Y: i32 = 100;
/// Top of the uncompressed block.
const BLOCK_Y: i32 = 350;
/// Height of the uncompressed block.
const BLOCK_HEIGHT: i32 = 80;
/// Number of crush marks drawn at high pressure.
pub const CRUSH_MARK_COUNT: i32 = 5;
/// Horizontal spacing of crush marks.
const CRUSH_MARK_SPACING: i32 = 35;

/// Geometry of the hydraulic press crushing a block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PressScene {
    /// Regime the constants were taken from.
    pub level: PressureLevel,
    /// Downward travel of the ram.
    pub piston_travel: i32,
    /// Horizontal shake applied to every part of the press.
    pub shake_offset: i32,
    /// How far the block is squashed.
    pub box_compression: i32,
    /// Caption under the press.
    pub state_label: &'static str,
    /// Caption colour.
    pub state_color: &'static str,
    /// Top edge of the ram head.
    pub piston_y: i32,
    /// Ram rod from the frame down to the head.
    pub rod: Rect,
    /// Ram head.
    pub head: Rect,
    /// Compressed block.
    pub block: Rect,
    /// Indicator strokes across the block midline, empty below high pressure.
    pub crush_marks: Vec<Segment>,
    /// Caption position and text.
    pub caption: Label,
}

impl PressScene {
    /// Build the press geometry for a non-negative pressure in pascals.
    ///
    /// # Examples
    /// ```
    /// use hydrolab::PressScene;
    ///
    /// let scene = PressScene::new(55_000.0);
    /// assert_eq!(scene.state_label, "Strong Press");
    /// assert_eq!(scene.box_compression, 15);
    /// ```
    #[must_use]
    pub fn new(pressure: f64) -> Self {
        let level = PressureLevel::classify(pressure);
        let profile = PressProfile::for_level(level);
        let shake = profile.jitter.map_or(0, |jitter| jitter.offset(pressure));

        let center = PRESS_CANVAS.width / 2 + shake;
        let piston_y = RAM_BASE_Y + profile.piston_travel;
        let block_top = BLOCK_Y + profile.box_compression;
        let block_height = BLOCK_HEIGHT - profile.box_compression;
        let block = Rect::centered(center, 70, block_top, block_top + block_height);

        let crush_marks = if profile.crush_marks {
            let midline = block_top + block_height / 2;
            (0..CRUSH_MARK_COUNT)
                .map(|i| {
                    let x = block.left + i * CRUSH_MARK_SPACING;
                    Segment {
                        start: (x, midline),
                        end: (x + 10, midline),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        trace!(pressure, ?level, shake, "built press scene");
        Self {
            level,
            piston_travel: profile.piston_travel,
            shake_offset: shake,
            box_compression: profile.box_compression,
            state_label: profile.label,
            state_color: profile.color,
            piston_y,
            rod: Rect::centered(center, 80, 50, piston_y),
            head: Rect::centered(center, 60, piston_y, piston_y + 30),
            block,
            crush_marks,
            caption: label(
                PRESS_CANVAS.width / 2,
                PRESS_CANVAS.height - 50,
                profile.label,
            ),
        }
    }
}

/// Build the press geometry for a pressure. See [`PressScene::new`].
#[must_use]
pub fn press_scene(pressure: f64) -> PressScene {
    PressScene::new(pressure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift_offsets_follow_pressure_factor() {
        let rest = lift_scene(0.0);
        assert_eq!(rest.small_piston_offset, 0);
        assert_eq!(rest.large_piston_offset, 0);
        assert_eq!(rest.fluid_top, 240);

        let half = lift_scene(50_000.0);
        assert_eq!(half.small_piston_offset, 15);
        assert_eq!(half.large_piston_offset, -20);
        assert_eq!(half.small_piston_y, 215);
        assert_eq!(half.large_piston_y, 180);
        assert_eq!(half.fluid_top, 255);
        assert_eq!(half.fluid_bottom, 350);

        let full = lift_scene(100_000.0);
        assert_eq!(full.small_piston_offset, 30);
        assert_eq!(full.large_piston_offset, -40);
    }

    #[test]
    fn lift_offsets_saturate() {
        let full = lift_scene(100_000.0);
        let beyond = lift_scene(120_000.0);
        assert_eq!(beyond.small_piston_offset, full.small_piston_offset);
        assert_eq!(beyond.large_piston_offset, full.large_piston_offset);
        assert_eq!(beyond.fluid_top, full.fluid_top);
    }

    #[test]
    fn lift_offsets_are_monotone() {
        let mut previous = lift_scene(0.0);
        for step in 1..=130 {
            let scene = lift_scene(f64::from(step) * 1_000.0);
            assert!(scene.small_piston_offset >= previous.small_piston_offset);
            assert!(scene.large_piston_offset <= previous.large_piston_offset);
            previous = scene;
        }
    }

    #[test]
    fn lift_fluid_colour_tracks_level() {
        assert_eq!(lift_scene(10_000.0).fluid_color, "#87CEEB");
        assert_eq!(lift_scene(50_000.0).fluid_color, "#4682B4");
        assert_eq!(lift_scene(90_000.0).fluid_color, "#00008B");
    }

    #[test]
    fn lift_parts_are_placed_around_pistons() {
        let scene = lift_scene(50_000.0);
        assert_eq!(scene.small_piston, Rect::new(120, 215, 180, 255));
        assert_eq!(scene.small_rod, Rect::new(140, 155, 160, 215));
        assert_eq!(scene.large_piston, Rect::new(390, 180, 510, 220));
        assert_eq!(scene.large_rod, Rect::new(435, 100, 465, 180));
        assert_eq!(scene.fluid, Rect::new(100, 255, 500, 350));
        assert_eq!(scene.labels[2], label(300, 315, "Pressure = 50000 Pa"));
    }

    #[test]
    fn press_profiles_cover_every_level() {
        for level in PressureLevel::ALL {
            let profile = PressProfile::for_level(level);
            assert_eq!(profile.crush_marks, level == PressureLevel::High);
        }
    }

    #[test]
    fn low_press_is_still() {
        let scene = press_scene(5_050.0);
        assert_eq!(scene.piston_travel, 20);
        assert_eq!(scene.shake_offset, 0);
        assert_eq!(scene.box_compression, 0);
        assert_eq!(scene.state_label, "Soft Press");
        assert_eq!(scene.piston_y, 120);
        assert!(scene.crush_marks.is_empty());
    }

    #[test]
    fn medium_press_is_constant_across_band() {
        for &pressure in &[20_000.0, 35_123.4, 55_000.0, 79_999.99] {
            let scene = press_scene(pressure);
            assert_eq!(scene.box_compression, 15);
            assert_eq!(scene.state_label, "Strong Press");
            assert_eq!(scene.state_color, "#FFA500");
        }
    }

    #[test]
    fn shake_follows_pressure_residue() {
        assert_eq!(press_scene(55_000.0).shake_offset, 0);
        assert_eq!(press_scene(55_050.0).shake_offset, 3);
        assert_eq!(press_scene(90_150.0).shake_offset, 5);
        assert_eq!(press_scene(55_000.0), press_scene(55_000.0));
    }

    #[test]
    fn shake_moves_the_whole_press() {
        let still = press_scene(90_000.0);
        let shaken = press_scene(90_150.0);
        assert_eq!(shaken.block.left - still.block.left, 5);
        assert_eq!(shaken.head.left - still.head.left, 5);
        assert_eq!(shaken.rod.left - still.rod.left, 5);
        assert_eq!(shaken.caption, still.caption);
    }

    #[test]
    fn high_press_crushes_block() {
        let scene = press_scene(90_000.0);
        assert_eq!(scene.piston_travel, 150);
        assert_eq!(scene.box_compression, 40);
        assert_eq!(scene.state_label, "CRUSH FORCE!");
        assert_eq!(scene.block, Rect::new(130, 390, 270, 430));

        let starts: Vec<_> = scene.crush_marks.iter().map(|mark| mark.start).collect();
        assert_eq!(
            starts,
            vec![(130, 410), (165, 410), (200, 410), (235, 410), (270, 410)]
        );
        assert!(scene.crush_marks.iter().all(|mark| mark.end.0 - mark.start.0 == 10));
    }
}
