//! The solver codes the driver couples.
//!
//! The driver only talks to these traits. [`NBodyGravity`] and
//! [`AnalyticStellarEvolution`] are the in-process implementations.

mod gravity;
mod stellar_evolution;

#[cfg(test)]
mod gravity_test;
#[cfg(test)]
mod stellar_evolution_test;

pub use gravity::NBodyGravity;
pub use stellar_evolution::AnalyticStellarEvolution;

use units::Time;

use crate::error::Result;
use crate::particles::{ParticleSet, ParticleSink, ParticleSource};

/// A gravitational dynamics code.
///
/// Energies are in M☉ AU² yr⁻².
pub trait GravityCode: ParticleSource + ParticleSink {
    fn add_particles(&mut self, particles: &ParticleSet) -> Result<()>;

    /// Advance the model to absolute time `time`.
    fn evolve_model(&mut self, time: Time) -> Result<()>;

    fn model_time(&self) -> Time;

    fn kinetic_energy(&self) -> f64;

    fn potential_energy(&self) -> f64;

    fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}

/// A stellar-evolution code.
///
/// Snapshots carry mass, luminosity, radius and temperature.
pub trait StellarEvolutionCode: ParticleSource {
    fn add_particles(&mut self, particles: &ParticleSet) -> Result<()>;

    /// Advance the model to absolute time `time`.
    fn evolve_model(&mut self, time: Time) -> Result<()>;

    fn model_time(&self) -> Time;

    /// Longest step the code can take while resolving every star, if any
    /// star still constrains it.
    fn suggested_timestep(&self) -> Option<Time>;
}
