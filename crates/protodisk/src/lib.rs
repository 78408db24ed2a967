//! External photoevaporation of circumstellar disks.
//!
//! Bright cluster members irradiate the disks of their low-mass neighbours
//! with far-ultraviolet light. This crate turns a stellar mass into an FUV
//! luminosity, attenuates it geometrically, looks the resulting field up in
//! the FRIED grid of mass-loss rates and maps the lost mass back onto an
//! exponential disk profile.

pub mod disk;
pub mod error;
pub mod fried;
pub mod radiation;

#[cfg(test)]
mod radiation_test;

pub use disk::{Disk, DiskError, ViscousParameters};
pub use error::{Error, Result};
pub use fried::{FriedGrid, FriedQuery, GridRow, Parameter, find_indices};
pub use radiation::{distance, fuv_luminosity, radiation_at_distance};
