use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Temperature, Time};

use super::constants::{G, R_GAS};

/// Temperature and viscosity profile of a viscously evolving disk.
///
/// Defaults follow Lynden-Bell & Pringle similarity solutions for a passively
/// heated disk (Hartmann et al. 1998).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViscousParameters {
    /// Negative temperature exponent, T ∝ r^-q
    pub temperature_profile: f64,
    pub reference_radius: Length,
    /// Disk temperature at `reference_radius` around a solar-luminosity star
    pub reference_temperature: Temperature,
    /// Molar mass of the gas (g/mol)
    pub molar_mass: f64,
    /// Radial exponent of the viscosity, ν ∝ r^γ
    pub viscosity_exponent: f64,
}

impl Default for ViscousParameters {
    fn default() -> Self {
        Self {
            temperature_profile: 0.5,
            reference_radius: Length::from_au(1.0),
            reference_temperature: Temperature::from_kelvin(280.0),
            molar_mass: 2.3,
            viscosity_exponent: 1.0,
        }
    }
}

impl ViscousParameters {
    pub(crate) fn timescale(
        &self,
        radius: Length,
        stellar_mass: Mass,
        luminosity: Luminosity,
        alpha: f64,
    ) -> Time {
        let q = self.temperature_profile;
        let temperature =
            self.reference_temperature.to_kelvin() * luminosity.to_solar_luminosities().powf(0.25);
        let gm = G * stellar_mass.to_grams();

        let seconds = self.molar_mass * radius.to_cm().powf(0.5 + q) * gm.sqrt()
            / (3.0
                * alpha
                * (2.0 - self.viscosity_exponent).powi(2)
                * R_GAS
                * temperature
                * self.reference_radius.to_cm().powf(q));

        Time::from_seconds(seconds)
    }
}
