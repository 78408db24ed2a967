//! Photoevaporation of protoplanetary disks in a young star cluster.
//!
//! A gravity code and a stellar-evolution code are coupled through attribute
//! channels. After every step the FUV flux of each bright star at each small
//! star is turned into disk mass loss with the FRIED grid.

pub mod cli;
pub mod codes;
pub mod config;
pub mod error;
pub mod initial;
pub mod particles;
pub mod report;
pub mod simulation;
pub mod snapshot;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod initial_test;

pub use cli::Cli;
pub use config::ClusterConfig;
pub use error::{Error, Result};
pub use initial::{InitialConditions, new_cluster};
pub use report::{DiskSummary, FinalDisk, RunSummary};
pub use simulation::{BrightStar, ClusterSimulation, SmallStar, photoevaporate};
pub use snapshot::SnapshotWriter;
