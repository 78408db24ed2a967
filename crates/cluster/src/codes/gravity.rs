use log::debug;
use nbody::forces::GasExpulsion;
use nbody::{ClusterState, CompositeForce, DirectGravity, ForceModel, Leapfrog, PlummerGas};
use std::collections::HashMap;
use units::{Mass, Time};

use super::GravityCode;
use crate::error::Result;
use crate::particles::{Attribute, Particle, ParticleKey, ParticleSet, ParticleSink, ParticleSource};

/// Softened direct-summation leapfrog, optionally inside a gas potential.
pub struct NBodyGravity {
    state: ClusterState,
    integrator: Leapfrog,
    force: CompositeForce,
    keys: Vec<ParticleKey>,
    index: HashMap<ParticleKey, usize>,
}

impl NBodyGravity {
    /// `softening` in AU; it also sets the length scale of the substep criterion.
    pub fn new(softening: f64, timestep_parameter: f64) -> Self {
        let integrator = Leapfrog::new(timestep_parameter).with_length_scale(softening.max(1.0));
        Self {
            state: ClusterState::new(),
            integrator,
            force: CompositeForce::new().with_force(DirectGravity::with_softening(softening)),
            keys: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a static or decaying Plummer gas sphere (mass M☉, radius AU).
    pub fn with_gas(mut self, mass: f64, plummer_radius: f64, expulsion: Option<GasExpulsion>) -> Self {
        let mut gas = PlummerGas::new(mass, plummer_radius);
        if let Some(expulsion) = expulsion {
            gas = gas.with_expulsion(expulsion);
        }
        self.force = std::mem::take(&mut self.force).with_force(gas);
        self
    }
}

impl ParticleSource for NBodyGravity {
    fn snapshot(&self) -> ParticleSet {
        self.keys
            .iter()
            .zip(&self.state.bodies)
            .map(|(&key, body)| {
                Particle::new(key, Mass::from_solar_masses(body.mass))
                    .with_phase_space(body.position, body.velocity)
            })
            .collect()
    }
}

impl ParticleSink for NBodyGravity {
    fn apply(&mut self, source: &ParticleSet, attributes: &[Attribute]) -> Result<usize> {
        let mut updated = 0;
        for particle in source {
            let Some(&i) = self.index.get(&particle.key) else {
                continue;
            };
            let body = &mut self.state.bodies[i];
            for attribute in attributes {
                match attribute {
                    Attribute::Mass => body.mass = particle.mass.to_solar_masses(),
                    Attribute::Position => body.position = particle.position,
                    Attribute::Velocity => body.velocity = particle.velocity,
                    // Not modelled here
                    Attribute::Luminosity | Attribute::Radius | Attribute::Temperature => {}
                }
            }
            updated += 1;
        }
        Ok(updated)
    }
}

impl GravityCode for NBodyGravity {
    fn add_particles(&mut self, particles: &ParticleSet) -> Result<()> {
        for particle in particles {
            if self.index.contains_key(&particle.key) {
                continue;
            }
            self.state
                .add_body(particle.mass.to_solar_masses(), particle.position, particle.velocity);
            self.index.insert(particle.key, self.keys.len());
            self.keys.push(particle.key);
        }
        Ok(())
    }

    fn evolve_model(&mut self, time: Time) -> Result<()> {
        let substeps = self.integrator.evolve_to(&mut self.state, time.to_years(), &self.force);
        debug!("gravity at {:.1} yr after {substeps} substeps", self.state.time);
        Ok(())
    }

    fn model_time(&self) -> Time {
        Time::from_years(self.state.time)
    }

    fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy()
    }

    /// Softened pair potential plus the gas potential, if any.
    fn potential_energy(&self) -> f64 {
        self.force.potential_energy(&self.state)
    }
}
