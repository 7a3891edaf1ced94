//! Completion of force, area and pressure triples via Pascal's law, P = F / A.
//!
//! See <https://en.wikipedia.org/wiki/Pascal%27s_law>.

use tracing::debug;

use crate::errors::{Quantity, ResolutionError};
use crate::quantities::{PhysicalTriple, Resolution};

/// Outcome of [`resolve`]: `Ok` is a resolved triple, `Err` a rejection.
pub type ResolutionResult = Result<Resolution, ResolutionError>;

/// Derive the missing quantity of a force, area and pressure triple.
///
/// Inputs are expected to be non-negative already. Only the quantity that ends up
/// as a divisor is checked, and it must be strictly positive. A complete triple is
/// returned verbatim without checking that it satisfies P = F / A.
///
/// # Errors
///
/// Returns [`ResolutionError::Underdetermined`] when fewer than two values are
/// present and [`ResolutionError::InvalidDivisor`] when the divisor is not positive.
///
/// # Examples
/// ```
/// use hydrolab::resolve;
///
/// let resolution = resolve(Some(5_000.0), None, Some(50_000.0)).expect("two values supplied");
/// assert_eq!(resolution.area, 0.1);
/// assert_eq!(resolution.message, "Calculated Area: 0.1000 m²");
/// ```
pub fn resolve(force: Option<f64>, area: Option<f64>, pressure: Option<f64>) -> ResolutionResult {
    PhysicalTriple::new(force, area, pressure).resolve()
}

impl PhysicalTriple {
    /// Derive the missing quantity of this triple. See [`resolve`].
    ///
    /// # Errors
    ///
    /// Same as [`resolve`].
    pub fn resolve(&self) -> ResolutionResult {
        let outcome = self.complete();
        match &outcome {
            Ok(resolution) => debug!(
                force = resolution.force,
                area = resolution.area,
                pressure = resolution.pressure,
                "{}",
                resolution.message
            ),
            Err(error) => debug!(triple = ?self, %error, "rejected triple"),
        }
        outcome
    }

    /// Branch on the missing quantity and apply the matching divisor guard.
    fn complete(&self) -> ResolutionResult {
        if self.filled() < 2 {
            return Err(ResolutionError::Underdetermined);
        }

        match (self.force, self.area, self.pressure) {
            (Some(force), Some(area), Some(pressure)) => Ok(Resolution {
                force,
                area,
                pressure,
                message: "all three supplied".to_owned(),
            }),
            (None, Some(area), Some(pressure)) => {
                let area = positive(area, Quantity::Area)?;
                let force = pressure * area;
                Ok(Resolution {
                    force,
                    area,
                    pressure,
                    message: format!("Calculated Force: {force:.2} N"),
                })
            }
            (Some(force), None, Some(pressure)) => {
                let pressure = positive(pressure, Quantity::Pressure)?;
                let area = force / pressure;
                Ok(Resolution {
                    force,
                    area,
                    pressure,
                    message: format!("Calculated Area: {area:.4} m²"),
                })
            }
            (Some(force), Some(area), None) => {
                let area = positive(area, Quantity::Area)?;
                let pressure = force / area;
                Ok(Resolution {
                    force,
                    area,
                    pressure,
                    message: format!("Calculated Pressure: {pressure:.2} Pa"),
                })
            }
            _ => Err(ResolutionError::Underdetermined),
        }
    }
}

/// Pass `value` through when it is strictly positive.
fn positive(value: f64, quantity: Quantity) -> Result<f64, ResolutionError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ResolutionError::InvalidDivisor { quantity })
    }
}
