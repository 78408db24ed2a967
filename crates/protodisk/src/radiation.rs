//! FUV emission of bright stars and its geometric dilution.
//!
//! The luminosity fit is a set of disjoint power laws `L = a·m^b` on open mass
//! intervals. Masses on an interval boundary, at or below 0.12 M☉, fall
//! through every segment and emit nothing.

use nalgebra::Point3;
use std::f64::consts::PI;
use units::{Flux, Length, Luminosity, Mass};

/// `(lower, upper, a, b)` for each segment of the mass-luminosity fit.
const FUV_SEGMENTS: [(f64, f64, f64, f64); 10] = [
    (0.12, 0.24, 1.70294e16, 42.557),
    (0.24, 0.56, 9.11137e-9, 3.8845),
    (0.56, 0.70, 1.10021e-6, 12.237),
    (0.70, 0.91, 2.38690e-4, 27.199),
    (0.91, 1.37, 1.02477e-4, 18.465),
    (1.37, 2.07, 9.66362e-4, 11.410),
    (2.07, 3.72, 6.49335e-2, 5.6147),
    (3.72, 10.0, 6.99075e-1, 3.8058),
    (10.0, 20.2, 9.73664e0, 2.6620),
    (20.2, f64::INFINITY, 1.31175e2, 1.7974),
];

/// FUV luminosity of a star of the given mass.
///
/// # Example
/// ```rust
/// use protodisk::fuv_luminosity;
/// use units::Mass;
///
/// let bright = fuv_luminosity(Mass::from_solar_masses(5.0));
/// assert!(bright.to_solar_luminosities() > 300.0);
///
/// // Segment boundaries are open
/// assert_eq!(fuv_luminosity(Mass::from_solar_masses(0.24)).to_solar_luminosities(), 0.0);
/// ```
pub fn fuv_luminosity(mass: Mass) -> Luminosity {
    let m = mass.to_solar_masses();
    FUV_SEGMENTS
        .iter()
        .find(|(lower, upper, _, _)| *lower < m && m < *upper)
        .map(|(_, _, a, b)| Luminosity::from_solar_luminosities(a * m.powf(*b)))
        .unwrap_or_else(Luminosity::zero)
}

/// Separation of two positions given in AU.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> Length {
    Length::from_au((b - a).norm())
}

/// Flux of an isotropic source at distance `r`: `L / (4π r²)`.
///
/// A zero distance gives an infinite flux.
pub fn radiation_at_distance(luminosity: Luminosity, r: Length) -> Flux {
    let r_cm = r.to_cm();
    Flux::from_erg_per_s_cm2(luminosity.to_erg_per_second() / (4.0 * PI * r_cm * r_cm))
}
