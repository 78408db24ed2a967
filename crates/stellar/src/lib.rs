//! Stellar populations for cluster models.
//!
//! IMF sampling, zero-age main-sequence relations and an analytic
//! evolution model for coeval stars.

pub mod evolution;
pub mod main_sequence;
pub mod sampling;


pub use evolution::{EvolvingStar, SOLAR_METALLICITY, StellarPhase, StellarPopulation};
pub use sampling::BrokenPowerLaw;
