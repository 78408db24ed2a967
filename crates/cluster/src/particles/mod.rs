//! Particle sets shared by the framework and the solver codes.
//!
//! Every code keeps its own copy of the cluster. Channels move named
//! attributes from one copy to another, matching particles by key.

mod channel;
mod set;


pub use channel::{Attribute, Channel};
pub use set::{Particle, ParticleKey, ParticleSet, ParticleSink, ParticleSource};
