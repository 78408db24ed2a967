use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let disk_reference = Temperature::from_kelvin(280.0);
/// assert_eq!(disk_reference.to_kelvin(), 280.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}
