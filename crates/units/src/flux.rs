use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Habing reference interstellar FUV flux in erg s⁻¹ cm⁻²
pub const G0_ERG_PER_S_CM2: f64 = 1.6e-3;

/// Incident radiative flux (power per area).
///
/// Stored in erg s⁻¹ cm⁻². FUV fields around circumstellar disks are quoted in
/// G0, the flux relative to the interstellar reference value.
///
/// # Examples
///
/// ```rust
/// use units::Flux;
///
/// let field = Flux::from_g0(1000.0);
/// assert!((field.to_erg_per_s_cm2() - 1.6).abs() < 1e-12);
/// assert!((field.to_g0() - 1000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Flux(f64); // Base unit: erg s⁻¹ cm⁻²

impl Flux {
    /// Creates a zero flux value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Flux` from a value in erg s⁻¹ cm⁻².
    pub fn from_erg_per_s_cm2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Flux` from a value in G0.
    pub fn from_g0(value: f64) -> Self {
        Self(value * G0_ERG_PER_S_CM2)
    }

    /// Returns the flux in erg s⁻¹ cm⁻².
    pub fn to_erg_per_s_cm2(&self) -> f64 {
        self.0
    }

    /// Converts the flux to G0.
    pub fn to_g0(&self) -> f64 {
        self.0 / G0_ERG_PER_S_CM2
    }
}

impl Add for Flux {
    type Output = Flux;

    fn add(self, rhs: Flux) -> Flux {
        Flux(self.0 + rhs.0)
    }
}
