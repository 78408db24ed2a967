//! Analytic single-star evolution for a coeval population.
//!
//! Each star sits on its zero-age main sequence for 90% of its lifetime, then
//! spends the last 10% as a giant shedding mass linearly down to its remnant
//! mass. The remnant type follows the initial mass.

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass, Temperature, Time};

use crate::main_sequence::{
    SOLAR_TEMPERATURE_K, radius_from_luminosity, stellar_lifetime, zams_properties,
};

/// Fraction of the lifetime spent on the main sequence
const MAIN_SEQUENCE_FRACTION: f64 = 0.9;

/// Fraction of the current phase a single step may cover
const TIMESTEP_FRACTION: f64 = 0.01;

/// Solar metallicity, mass fraction
pub const SOLAR_METALLICITY: f64 = 0.02;

/// Evolutionary phase of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StellarPhase {
    MainSequence,
    Giant,
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

impl StellarPhase {
    pub fn is_remnant(&self) -> bool {
        matches!(
            self,
            StellarPhase::WhiteDwarf | StellarPhase::NeutronStar | StellarPhase::BlackHole
        )
    }
}

/// A star evolved analytically from its initial mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolvingStar {
    pub initial_mass: Mass,
    pub birth_time: Time,
    pub phase: StellarPhase,
    pub mass: Mass,
    pub luminosity: Luminosity,
    pub radius: Length,
    pub temperature: Temperature,
}

impl EvolvingStar {
    /// A zero-age main-sequence star
    pub fn new(initial_mass: Mass, birth_time: Time) -> Self {
        let (luminosity, temperature) = zams_properties(initial_mass);
        Self {
            initial_mass,
            birth_time,
            phase: StellarPhase::MainSequence,
            mass: initial_mass,
            luminosity,
            radius: radius_from_luminosity(luminosity, temperature),
            temperature,
        }
    }

    pub fn lifetime(&self) -> Time {
        stellar_lifetime(self.initial_mass)
    }

    /// Recompute the state at absolute time `time`
    pub fn evolve_to(&mut self, time: Time, metallicity: f64) {
        let age = (time - self.birth_time).max(Time::zero());
        let lifetime = self.lifetime();
        let life_fraction = age / lifetime;

        if life_fraction < MAIN_SEQUENCE_FRACTION {
            *self = Self::new(self.initial_mass, self.birth_time);
        } else if life_fraction < 1.0 {
            self.become_giant(life_fraction, metallicity);
        } else {
            self.become_remnant(metallicity);
        }
    }

    /// Duration of the current phase, `None` once the star is a remnant
    pub fn phase_duration(&self) -> Option<Time> {
        let lifetime = self.lifetime();
        match self.phase {
            StellarPhase::MainSequence => Some(lifetime * MAIN_SEQUENCE_FRACTION),
            StellarPhase::Giant => Some(lifetime * (1.0 - MAIN_SEQUENCE_FRACTION)),
            _ => None,
        }
    }

    fn become_giant(&mut self, life_fraction: f64, metallicity: f64) {
        let (zams_luminosity, zams_temperature) = zams_properties(self.initial_mass);
        let progress = (life_fraction - MAIN_SEQUENCE_FRACTION) / (1.0 - MAIN_SEQUENCE_FRACTION);
        let (_, remnant_mass) = remnant(self.initial_mass, metallicity);

        self.phase = StellarPhase::Giant;
        self.mass = self.initial_mass - (self.initial_mass - remnant_mass) * progress;
        self.luminosity = zams_luminosity * 10.0;
        self.temperature = Temperature::from_kelvin((zams_temperature.to_kelvin() * 0.5).min(4000.0));
        self.radius = radius_from_luminosity(self.luminosity, self.temperature);
    }

    fn become_remnant(&mut self, metallicity: f64) {
        let (phase, mass) = remnant(self.initial_mass, metallicity);
        self.phase = phase;
        self.mass = mass;

        match phase {
            StellarPhase::WhiteDwarf => {
                let m = mass.to_solar_masses();
                let radius_solar = 0.01 * (0.6 / m).powf(1.0 / 3.0);
                let luminosity = 0.001 * (m / 0.6);
                self.luminosity = Luminosity::from_solar_luminosities(luminosity);
                self.radius = Length::from_solar_radii(radius_solar);
                self.temperature = Temperature::from_kelvin(
                    SOLAR_TEMPERATURE_K * (luminosity / (radius_solar * radius_solar)).powf(0.25),
                );
            }
            StellarPhase::NeutronStar => {
                self.luminosity = Luminosity::zero();
                self.radius = Length::from_km(12.0);
                self.temperature = Temperature::from_kelvin(0.0);
            }
            _ => {
                // Schwarzschild radius, 2.95 km per solar mass
                self.luminosity = Luminosity::zero();
                self.radius = Length::from_km(2.95 * mass.to_solar_masses());
                self.temperature = Temperature::from_kelvin(0.0);
            }
        }
    }
}

/// Remnant type and mass for a given initial mass
fn remnant(initial_mass: Mass, metallicity: f64) -> (StellarPhase, Mass) {
    match initial_mass.to_solar_masses() {
        // Initial-final mass relation for white dwarfs
        m if m < 8.0 => (
            StellarPhase::WhiteDwarf,
            Mass::from_solar_masses(0.109 * m + 0.394),
        ),
        m if m < 20.0 => (StellarPhase::NeutronStar, Mass::from_solar_masses(1.4)),
        // Wind losses scale with metallicity, the supernova takes about a third
        m => (
            StellarPhase::BlackHole,
            Mass::from_solar_masses(m * (0.65 - 0.4 * metallicity)),
        ),
    }
}

/// A coeval population evolved in lock step
///
/// # Example
/// ```rust
/// use stellar::{StellarPhase, StellarPopulation};
/// use units::{Mass, Time};
///
/// let mut population = StellarPopulation::new(0.02);
/// let index = population.add_star(Mass::from_solar_masses(30.0));
/// population.evolve_to(Time::from_myr(10.0));
///
/// assert_eq!(population.stars()[index].phase, StellarPhase::BlackHole);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarPopulation {
    metallicity: f64,
    time: Time,
    stars: Vec<EvolvingStar>,
}

impl StellarPopulation {
    pub fn new(metallicity: f64) -> Self {
        Self {
            metallicity,
            time: Time::zero(),
            stars: Vec::new(),
        }
    }

    /// Add a zero-age star born at the current model time, returning its index
    pub fn add_star(&mut self, initial_mass: Mass) -> usize {
        self.stars.push(EvolvingStar::new(initial_mass, self.time));
        self.stars.len() - 1
    }

    pub fn metallicity(&self) -> f64 {
        self.metallicity
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn stars(&self) -> &[EvolvingStar] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn evolve_to(&mut self, time: Time) {
        for star in &mut self.stars {
            star.evolve_to(time, self.metallicity);
        }
        self.time = time;
    }

    /// Largest step that resolves every star's current phase
    ///
    /// `None` when no star is still burning.
    pub fn suggested_timestep(&self) -> Option<Time> {
        self.stars
            .iter()
            .filter_map(EvolvingStar::phase_duration)
            .map(|duration| duration * TIMESTEP_FRACTION)
            .reduce(Time::min)
    }
}

impl Default for StellarPopulation {
    fn default() -> Self {
        Self::new(SOLAR_METALLICITY)
    }
}
