use log::debug;
use stellar::StellarPopulation;
use std::collections::HashMap;
use units::Time;

use super::StellarEvolutionCode;
use crate::error::Result;
use crate::particles::{Particle, ParticleKey, ParticleSet, ParticleSource};

/// Analytic single-star evolution of a coeval population.
pub struct AnalyticStellarEvolution {
    population: StellarPopulation,
    keys: Vec<ParticleKey>,
    index: HashMap<ParticleKey, usize>,
}

impl AnalyticStellarEvolution {
    pub fn new(metallicity: f64) -> Self {
        Self {
            population: StellarPopulation::new(metallicity),
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn population(&self) -> &StellarPopulation {
        &self.population
    }
}

impl ParticleSource for AnalyticStellarEvolution {
    fn snapshot(&self) -> ParticleSet {
        self.keys
            .iter()
            .zip(self.population.stars())
            .map(|(&key, star)| {
                let mut particle = Particle::new(key, star.mass);
                particle.luminosity = star.luminosity;
                particle.radius = star.radius;
                particle.temperature = star.temperature;
                particle
            })
            .collect()
    }
}

impl StellarEvolutionCode for AnalyticStellarEvolution {
    /// Stars join as zero-age main-sequence stars of their current mass.
    fn add_particles(&mut self, particles: &ParticleSet) -> Result<()> {
        for particle in particles {
            if self.index.contains_key(&particle.key) {
                continue;
            }
            let i = self.population.add_star(particle.mass);
            self.index.insert(particle.key, i);
            self.keys.push(particle.key);
        }
        Ok(())
    }

    fn evolve_model(&mut self, time: Time) -> Result<()> {
        self.population.evolve_to(time);
        debug!("stellar evolution at {:.1} yr", time.to_years());
        Ok(())
    }

    fn model_time(&self) -> Time {
        self.population.time()
    }

    fn suggested_timestep(&self) -> Option<Time> {
        self.population.suggested_timestep()
    }
}
