use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Solar luminosity in erg/s (3.839 × 10³³ erg/s)
pub const SOLAR_LUMINOSITY_ERG_S: f64 = 3.839e33;

/// A radiated power using f64 precision.
///
/// The base unit is the solar luminosity. Flux calculations need erg/s, so the
/// CGS conversion is the usual exit point.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar_luminosities(1.0);
/// assert_eq!(sun.to_erg_per_second(), 3.839e33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    /// Creates a zero luminosity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar_luminosities(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in erg/s.
    pub fn from_erg_per_second(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_ERG_S)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar_luminosities(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to erg/s.
    pub fn to_erg_per_second(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_ERG_S
    }
}

impl Add for Luminosity {
    type Output = Luminosity;

    fn add(self, rhs: Luminosity) -> Luminosity {
        Luminosity(self.0 + rhs.0)
    }
}

impl Mul<f64> for Luminosity {
    type Output = Luminosity;

    fn mul(self, rhs: f64) -> Luminosity {
        Luminosity(self.0 * rhs)
    }
}
