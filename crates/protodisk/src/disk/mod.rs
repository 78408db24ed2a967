//! Circumstellar disks with an exponential surface-density profile.
//!
//! Σ(r) ∝ exp(-r / R_c) encloses `M (1 - exp(-r / R_c))` within `r`, so mass
//! stripped from the outside edge maps back to a truncation radius.

pub(crate) mod constants;
mod error;
mod exponential;
mod viscous;

#[cfg(test)]
mod exponential_test;
#[cfg(test)]
mod viscous_test;

pub use error::DiskError;
pub use exponential::Disk;
pub use viscous::ViscousParameters;
