use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Time};

use super::error::DiskError;
use super::viscous::ViscousParameters;

/// A disk described by its total mass and characteristic radius.
///
/// Both are strictly positive; [`Disk::new`] refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    mass: Mass,
    characteristic_radius: Length,
}

impl Disk {
    pub fn new(mass: Mass, characteristic_radius: Length) -> Result<Self, DiskError> {
        // Negated comparisons also reject NaN
        if !(mass.to_grams() > 0.0) {
            return Err(DiskError::NonPositiveMass);
        }
        if !(characteristic_radius.to_au() > 0.0) {
            return Err(DiskError::NonPositiveRadius);
        }
        Ok(Self {
            mass,
            characteristic_radius,
        })
    }

    /// Initial disk of a young star: `mass_fraction · M★` within
    /// `radius_coefficient · √(M★ / M☉)` AU.
    ///
    /// # Example
    /// ```rust
    /// use protodisk::Disk;
    /// use units::Mass;
    ///
    /// let disk = Disk::for_star(Mass::from_solar_masses(0.25), 0.1, 100.0).unwrap();
    /// assert!((disk.mass().to_solar_masses() - 0.025).abs() < 1e-12);
    /// assert!((disk.characteristic_radius().to_au() - 50.0).abs() < 1e-9);
    /// ```
    pub fn for_star(
        stellar_mass: Mass,
        mass_fraction: f64,
        radius_coefficient: f64,
    ) -> Result<Self, DiskError> {
        Self::new(
            stellar_mass * mass_fraction,
            Length::from_au(radius_coefficient * stellar_mass.to_solar_masses().sqrt()),
        )
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn characteristic_radius(&self) -> Length {
        self.characteristic_radius
    }

    /// Radius enclosing `enclosed` of the disk mass:
    /// `R_c · ln(1 / (1 - m / M))`.
    pub fn radius_containing_mass(&self, enclosed: Mass) -> Result<Length, DiskError> {
        let fraction = enclosed / self.mass;
        if fraction < 0.0 {
            return Err(DiskError::NegativeEnclosedMass);
        }
        if !(fraction < 1.0) {
            return Err(DiskError::EnclosedMassNotBelowTotal);
        }
        Ok(self.characteristic_radius * (1.0 / (1.0 - fraction)).ln())
    }

    /// Viscous evolution timescale around a host of the given mass and
    /// luminosity, for turbulence parameter `alpha`.
    ///
    /// τ = μ R^(½+q) (G M)^½ / (3 α (2-γ)² R_gas T R_ref^q), with the disk
    /// temperature at `R_ref` scaling as `T_ref (L / L☉)^¼`.
    pub fn viscous_timescale(
        &self,
        stellar_mass: Mass,
        luminosity: Luminosity,
        alpha: f64,
        parameters: &ViscousParameters,
    ) -> Time {
        parameters.timescale(self.characteristic_radius, stellar_mass, luminosity, alpha)
    }
}
