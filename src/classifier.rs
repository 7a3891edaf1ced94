//! Discrete pressure regimes and their colours.

use serde::Serialize;

/// Lower bound, in pascals, of the [`PressureLevel::Medium`] regime.
pub const MEDIUM_THRESHOLD: f64 = 20_000.0;
/// Lower bound, in pascals, of the [`PressureLevel::High`] regime.
pub const HIGH_THRESHOLD: f64 = 80_000.0;

/// Pressure regime of a hydraulic system.
///
/// Levels are recomputed from a pressure value on demand and carry no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PressureLevel {
    /// Below 20 kPa.
    Low,
    /// From 20 kPa up to, but excluding, 80 kPa.
    Medium,
    /// 80 kPa and above.
    High,
}

impl PressureLevel {
    /// All levels, lowest first.
    pub const ALL: [PressureLevel; 3] = [PressureLevel::Low, PressureLevel::Medium, PressureLevel::High];

    /// Classify a non-negative pressure in pascals.
    ///
    /// Band edges belong to the upper band, so exactly 20 kPa is medium and
    /// exactly 80 kPa is high.
    ///
    /// # Examples
    /// ```
    /// use hydrolab::PressureLevel;
    ///
    /// assert_eq!(PressureLevel::classify(19_999.99), PressureLevel::Low);
    /// assert_eq!(PressureLevel::classify(20_000.0), PressureLevel::Medium);
    /// assert_eq!(PressureLevel::classify(80_000.0), PressureLevel::High);
    /// ```
    #[must_use]
    pub fn classify(pressure: f64) -> Self {
        if pressure < MEDIUM_THRESHOLD {
            PressureLevel::Low
        } else if pressure < HIGH_THRESHOLD {
            PressureLevel::Medium
        } else {
            PressureLevel::High
        }
    }

    /// Upper-case name shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PressureLevel::Low => "LOW",
            PressureLevel::Medium => "MEDIUM",
            PressureLevel::High => "HIGH",
        }
    }

    /// Fluid and gauge colour for the level.
    #[must_use]
    pub const fn hex_color(self) -> &'static str {
        match self {
            PressureLevel::Low => "#87CEEB",
            PressureLevel::Medium => "#4682B4",
            PressureLevel::High => "#00008B",
        }
    }

    /// Plain-language name of [`hex_color`](Self::hex_color).
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            PressureLevel::Low => "light blue",
            PressureLevel::Medium => "medium blue",
            PressureLevel::High => "dark blue",
        }
    }

    /// What the hydraulic press does to its workpiece at this level.
    #[must_use]
    pub const fn press_description(self) -> &'static str {
        match self {
            PressureLevel::Low => "Light compression - material barely affected",
            PressureLevel::Medium => "Strong force - material deforming",
            PressureLevel::High => "Maximum force - crushing material!",
        }
    }
}

impl std::fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a non-negative pressure in pascals. See [`PressureLevel::classify`].
#[must_use]
pub fn classify(pressure: f64) -> PressureLevel {
    PressureLevel::classify(pressure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_belong_to_upper_band() {
        assert_eq!(classify(0.0), PressureLevel::Low);
        assert_eq!(classify(19_999.99), PressureLevel::Low);
        assert_eq!(classify(20_000.0), PressureLevel::Medium);
        assert_eq!(classify(79_999.99), PressureLevel::Medium);
        assert_eq!(classify(80_000.0), PressureLevel::High);
        assert_eq!(classify(1.0e9), PressureLevel::High);
    }

    #[test]
    fn colours_match_level() {
        let colours: Vec<_> = PressureLevel::ALL
            .iter()
            .map(|level| (level.hex_color(), level.color_name()))
            .collect();
        assert_eq!(
            colours,
            vec![
                ("#87CEEB", "light blue"),
                ("#4682B4", "medium blue"),
                ("#00008B", "dark blue"),
            ]
        );
    }

    #[test]
    fn serializes_as_upper_case_label() {
        let json = serde_json::to_string(&PressureLevel::Medium).expect("serializable");
        assert_eq!(json, "\"MEDIUM\"");
        assert_eq!(PressureLevel::High.to_string(), "HIGH");
    }
}
