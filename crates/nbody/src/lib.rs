//! Softened direct-summation N-body dynamics for star clusters.
//!
//! Units are AU, solar masses and years throughout, so `G = 4π²`.

pub mod body;
pub mod forces;
pub mod integrator;
pub mod plummer;
pub mod state;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod state_test;

pub use body::{Body, BodyId};
pub use forces::{CompositeForce, DirectGravity, ForceModel, G, PlummerGas};
pub use integrator::{Integrator, Leapfrog};
pub use state::ClusterState;
