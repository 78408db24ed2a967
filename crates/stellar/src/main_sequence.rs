//! Zero-age main-sequence relations.
//!
//! Piecewise mass-luminosity and mass-temperature fits, with the radius
//! following from Stefan-Boltzmann.

use units::{Length, Luminosity, Mass, Temperature, Time};

/// Solar effective temperature in Kelvin
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Shortest main-sequence lifetime, reached by the most massive stars
pub const MIN_LIFETIME_MYR: f64 = 3.0;

/// Zero-age main-sequence luminosity and effective temperature.
///
/// # Example
/// ```rust
/// use stellar::main_sequence::zams_properties;
/// use units::Mass;
///
/// let (luminosity, temperature) = zams_properties(Mass::from_solar_masses(1.0));
/// assert_eq!(luminosity.to_solar_luminosities(), 1.0);
/// assert!((temperature.to_kelvin() - 5800.0).abs() < 1.0);
/// ```
pub fn zams_properties(mass: Mass) -> (Luminosity, Temperature) {
    let (luminosity, temperature) = match mass.to_solar_masses() {
        // Very massive main sequence (> 30 M☉)
        m if m > 30.0 => (3.0e4 * (m / 30.0).powf(3.5), 38000.0 * (m / 30.0).powf(0.2)),
        // Massive main sequence (8-30 M☉)
        m if m > 8.0 => (1.0e3 * (m / 8.0).powf(3.5), 22000.0 * (m / 8.0).powf(0.2)),
        // Intermediate mass main sequence (2-8 M☉)
        m if m > 2.0 => (25.0 * (m / 2.0).powf(3.5), 9000.0 * (m / 2.0).powf(0.2)),
        // Solar-type main sequence (0.8-2 M☉)
        m if m > 0.8 => (m.powf(4.0), 5800.0 * m.powf(0.1)),
        // Low mass main sequence (< 0.8 M☉)
        m => {
            let temperature = if m < 0.45 {
                2500.0 * (m / 0.08).powf(0.23)
            } else {
                3700.0 * (m / 0.45).powf(0.45)
            };
            (m.powf(2.3), temperature)
        }
    };

    (
        Luminosity::from_solar_luminosities(luminosity),
        Temperature::from_kelvin(temperature),
    )
}

/// Radius from luminosity and effective temperature: R/R☉ = (L/L☉)^½ / (T/T☉)²
pub fn radius_from_luminosity(luminosity: Luminosity, temperature: Temperature) -> Length {
    let t = temperature.to_kelvin();
    if t <= 0.0 {
        return Length::zero();
    }
    Length::from_solar_radii(
        luminosity.to_solar_luminosities().sqrt() / (t / SOLAR_TEMPERATURE_K).powi(2),
    )
}

/// Hydrogen-burning lifetime, 10 Gyr × M^-2.5, floored at [`MIN_LIFETIME_MYR`].
pub fn stellar_lifetime(mass: Mass) -> Time {
    let m = mass.to_solar_masses();
    Time::from_myr((1.0e4 * m.powf(-2.5)).max(MIN_LIFETIME_MYR))
}
