//! Value types shared by the solver and the scene builders.

use serde::Serialize;
use uom::si::{
    area::square_meter,
    f64::{Area, Force, Pressure},
    force::newton,
    pressure::pascal,
};

/// Up to three Pascal's law quantities in SI base units.
///
/// A triple with two or more absent fields is underdetermined and resolving it
/// fails with [`ResolutionError::Underdetermined`](crate::ResolutionError::Underdetermined).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicalTriple {
    /// Force in newtons.
    pub force: Option<f64>,
    /// Area in square metres.
    pub area: Option<f64>,
    /// Pressure in pascals.
    pub pressure: Option<f64>,
}

impl PhysicalTriple {
    /// Create a [`PhysicalTriple`] from raw SI values.
    #[must_use]
    pub const fn new(force: Option<f64>, area: Option<f64>, pressure: Option<f64>) -> Self {
        Self {
            force,
            area,
            pressure,
        }
    }

    /// Create a [`PhysicalTriple`] from typed quantities in any unit.
    ///
    /// # Examples
    /// ```
    /// use hydrolab::PhysicalTriple;
    /// use uom::si::f64::{Force, Pressure};
    /// use uom::si::{force::kilonewton, pressure::kilopascal};
    ///
    /// let triple = PhysicalTriple::from_quantities(
    ///     Some(Force::new::<kilonewton>(5.0)),
    ///     None,
    ///     Some(Pressure::new::<kilopascal>(50.0)),
    /// );
    /// assert_eq!(triple.force, Some(5_000.0));
    /// assert_eq!(triple.pressure, Some(50_000.0));
    /// ```
    #[must_use]
    pub fn from_quantities(
        force: Option<Force>,
        area: Option<Area>,
        pressure: Option<Pressure>,
    ) -> Self {
        Self::new(
            force.map(|f| f.get::<newton>()),
            area.map(|a| a.get::<square_meter>()),
            pressure.map(|p| p.get::<pascal>()),
        )
    }

    /// Number of quantities that are present.
    #[must_use]
    pub fn filled(&self) -> usize {
        [self.force, self.area, self.pressure]
            .iter()
            .filter(|value| value.is_some())
            .count()
    }
}

/// A fully resolved force, area and pressure triple.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resolution {
    /// Force in newtons.
    pub force: f64,
    /// Area in square metres.
    pub area: f64,
    /// Pressure in pascals.
    pub pressure: f64,
    /// Summary of how the triple was completed.
    pub message: String,
}

impl Resolution {
    /// Return the triple as typed SI quantities.
    #[must_use]
    pub fn quantities(&self) -> (Force, Area, Pressure) {
        (
            Force::new::<newton>(self.force),
            Area::new::<square_meter>(self.area),
            Pressure::new::<pascal>(self.pressure),
        )
    }
}

impl From<&Resolution> for PhysicalTriple {
    fn from(value: &Resolution) -> Self {
        Self::new(Some(value.force), Some(value.area), Some(value.pressure))
    }
}

/// Axis-aligned rectangle in pixel space, inclusive of both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Rect {
    /// Create a [`Rect`] from its corners.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a [`Rect`] horizontally centred on `center_x`.
    #[must_use]
    pub const fn centered(center_x: i32, half_width: i32, top: i32, bottom: i32) -> Self {
        Self::new(center_x - half_width, top, center_x + half_width, bottom)
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Straight line between two points in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Start point as `(x, y)`.
    pub start: (i32, i32),
    /// End point as `(x, y)`.
    pub end: (i32, i32),
}

/// Position of a text label in pixel space, anchored at its centre.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Horizontal anchor.
    pub x: i32,
    /// Vertical anchor.
    pub y: i32,
    /// Text to draw.
    pub text: String,
}

/// Convenience helper for creating [`Label`] instances.
///
/// # Examples
/// ```
/// use hydrolab::label;
///
/// let caption = label(300, 60, "Pressure");
/// assert_eq!(caption.text, "Pressure");
/// ```
#[must_use]
pub fn label(x: i32, y: i32, text: impl Into<String>) -> Label {
    Label {
        x,
        y,
        text: text.into(),
    }
}
