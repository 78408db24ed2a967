use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use units::{Length, Luminosity, Mass, Temperature};

use super::channel::Attribute;
use crate::error::{Error, Result};

/// Stable identity of a star across every particle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleKey(pub u64);

/// One star as seen by any particle set.
///
/// Codes fill in the attributes they model and leave the rest at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    pub key: ParticleKey,
    pub mass: Mass,
    /// Position in AU
    pub position: Point3<f64>,
    /// Velocity in AU/yr
    pub velocity: Vector3<f64>,
    pub luminosity: Luminosity,
    pub radius: Length,
    pub temperature: Temperature,
}

impl Particle {
    pub fn new(key: ParticleKey, mass: Mass) -> Self {
        Self {
            key,
            mass,
            position: Point3::origin(),
            velocity: Vector3::zeros(),
            luminosity: Luminosity::zero(),
            radius: Length::zero(),
            temperature: Temperature::from_kelvin(0.0),
        }
    }

    pub fn with_phase_space(mut self, position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    /// Copy the named attributes of `source` onto this particle.
    pub fn copy_attributes(&mut self, source: &Particle, attributes: &[Attribute]) {
        for attribute in attributes {
            match attribute {
                Attribute::Mass => self.mass = source.mass,
                Attribute::Position => self.position = source.position,
                Attribute::Velocity => self.velocity = source.velocity,
                Attribute::Luminosity => self.luminosity = source.luminosity,
                Attribute::Radius => self.radius = source.radius,
                Attribute::Temperature => self.temperature = source.temperature,
            }
        }
    }
}

/// Anything a channel can read particles from.
pub trait ParticleSource {
    fn snapshot(&self) -> ParticleSet;
}

/// Anything a channel can write attributes into.
pub trait ParticleSink {
    /// Overwrite `attributes` of every particle that also appears in `source`.
    ///
    /// Returns the number of particles updated. Keys present on only one side
    /// are left alone.
    fn apply(&mut self, source: &ParticleSet, attributes: &[Attribute]) -> Result<usize>;
}

/// Keyed, insertion-ordered collection of particles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Particle>", into = "Vec<Particle>")]
pub struct ParticleSet {
    particles: Vec<Particle>,
    index: HashMap<ParticleKey, usize>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a particle, replacing any earlier one with the same key.
    pub fn insert(&mut self, particle: Particle) {
        match self.index.get(&particle.key) {
            Some(&i) => self.particles[i] = particle,
            None => {
                self.index.insert(particle.key, self.particles.len());
                self.particles.push(particle);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = ParticleKey> + '_ {
        self.particles.iter().map(|p| p.key)
    }

    pub fn get(&self, key: ParticleKey) -> Option<&Particle> {
        self.index.get(&key).map(|&i| &self.particles[i])
    }

    pub fn get_mut(&mut self, key: ParticleKey) -> Option<&mut Particle> {
        self.index.get(&key).map(|&i| &mut self.particles[i])
    }

    /// Like [`ParticleSet::get`] but a missing key is an error.
    pub fn require(&self, key: ParticleKey) -> Result<&Particle> {
        self.get(key).ok_or(Error::UnknownParticle(key))
    }

    pub fn contains(&self, key: ParticleKey) -> bool {
        self.index.contains_key(&key)
    }

    /// Particles matching `predicate`, in order.
    pub fn select(&self, predicate: impl Fn(&Particle) -> bool) -> ParticleSet {
        self.particles.iter().filter(|p| predicate(p)).copied().collect()
    }

    pub fn total_mass(&self) -> Mass {
        self.particles.iter().map(|p| p.mass).sum()
    }
}

impl FromIterator<Particle> for ParticleSet {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        let mut set = ParticleSet::new();
        for particle in iter {
            set.insert(particle);
        }
        set
    }
}

impl From<Vec<Particle>> for ParticleSet {
    fn from(particles: Vec<Particle>) -> Self {
        particles.into_iter().collect()
    }
}

impl From<ParticleSet> for Vec<Particle> {
    fn from(set: ParticleSet) -> Self {
        set.particles
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

impl ParticleSource for ParticleSet {
    fn snapshot(&self) -> ParticleSet {
        self.clone()
    }
}

impl ParticleSink for ParticleSet {
    fn apply(&mut self, source: &ParticleSet, attributes: &[Attribute]) -> Result<usize> {
        let mut updated = 0;
        for particle in source {
            if let Some(target) = self.get_mut(particle.key) {
                target.copy_attributes(particle, attributes);
                updated += 1;
            }
        }
        Ok(updated)
    }
}
