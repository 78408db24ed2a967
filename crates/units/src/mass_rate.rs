use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::mass::{Mass, SOLAR_MASS_G};
use crate::time::Time;

/// A physical mass rate (mass per time) quantity using f64 precision.
///
/// The base unit is solar masses per year, the unit photoevaporative
/// mass-loss rates are tabulated in.
///
/// # Examples
///
/// ```rust
/// use units::{MassRate, Time};
///
/// // FRIED tabulates log10 of the rate
/// let rate = MassRate::from_log10_solar_masses_per_year(-8.0);
/// let lost = rate.integrate(Time::from_years(2000.0));
///
/// assert!((lost.to_solar_masses() - 2e-5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: Solar Masses per year

impl MassRate {
    /// Creates a zero rate
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `MassRate` from a value in solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from log10 of a rate in solar masses per year.
    pub fn from_log10_solar_masses_per_year(log10_rate: f64) -> Self {
        Self(10f64.powf(log10_rate))
    }

    /// Creates a new `MassRate` from a value in grams per second.
    pub fn from_grams_per_second(value: f64) -> Self {
        Self(value * Time::from_years(1.0).to_seconds() / SOLAR_MASS_G)
    }

    /// Returns the mass rate value in solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0
    }

    /// Returns log10 of the rate in solar masses per year.
    pub fn to_log10_solar_masses_per_year(&self) -> f64 {
        self.0.log10()
    }

    /// Integrates the mass rate over a time period to get total mass.
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_solar_masses(self.0 * duration.to_years())
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}
