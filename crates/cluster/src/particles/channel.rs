use log::trace;
use serde::{Deserialize, Serialize};

use super::set::{ParticleSink, ParticleSource};
use crate::error::Result;

/// Attribute a channel may copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Mass,
    Position,
    Velocity,
    Luminosity,
    Radius,
    Temperature,
}

impl Attribute {
    /// What a gravity code evolves.
    pub const DYNAMICAL: [Attribute; 3] = [Attribute::Mass, Attribute::Position, Attribute::Velocity];

    /// What a stellar-evolution code evolves.
    pub const STELLAR: [Attribute; 4] = [
        Attribute::Mass,
        Attribute::Luminosity,
        Attribute::Radius,
        Attribute::Temperature,
    ];
}

/// A one-directional copy of named attributes between two particle sets.
///
/// # Example
/// ```rust
/// use cluster::particles::{Attribute, Channel, Particle, ParticleKey, ParticleSet};
/// use units::Mass;
///
/// let key = ParticleKey(1);
/// let source: ParticleSet = vec![Particle::new(key, Mass::from_solar_masses(4.5))].into();
/// let mut target: ParticleSet = vec![Particle::new(key, Mass::from_solar_masses(5.0))].into();
///
/// let channel = Channel::new("stellar -> framework", &[Attribute::Mass]);
/// channel.copy(&source, &mut target).unwrap();
///
/// assert_eq!(target.get(key).unwrap().mass, Mass::from_solar_masses(4.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    name: String,
    attributes: Vec<Attribute>,
}

impl Channel {
    pub fn new(name: impl Into<String>, attributes: &[Attribute]) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Copy from `source` into `target`; returns the number of matched particles.
    pub fn copy<S, T>(&self, source: &S, target: &mut T) -> Result<usize>
    where
        S: ParticleSource + ?Sized,
        T: ParticleSink + ?Sized,
    {
        let snapshot = source.snapshot();
        let updated = target.apply(&snapshot, &self.attributes)?;
        trace!("channel {}: {updated} of {} particles", self.name, snapshot.len());
        Ok(updated)
    }
}
