//! Command-line flags.
//!
//! Every flag is optional; a flag that is given overrides the value from the
//! defaults or the `--config` file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ClusterConfig;
use crate::error::Result;

#[derive(Parser, Debug, Default)]
#[command(
    name = "cluster",
    version,
    about = "External photoevaporation of protoplanetary disks in a young star cluster"
)]
pub struct Cli {
    /// JSON file overriding the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run number [0]
    #[arg(short = 'n')]
    pub run_number: Option<u32>,

    /// Directory receiving run output [.]
    #[arg(short = 's')]
    pub save_path: Option<PathBuf>,

    /// Snapshot interval in yr [50000]
    #[arg(short = 'i')]
    pub save_interval: Option<f64>,

    /// Number of stars [2000]
    #[arg(short = 'N')]
    pub number_of_stars: Option<usize>,

    /// Cluster virial radius in pc [0.5]
    #[arg(short = 'R')]
    pub virial_radius: Option<f64>,

    /// Virial ratio [0.5]
    #[arg(short = 'Q')]
    pub virial_ratio: Option<f64>,

    /// Disk turbulence parameter [1e-4]
    #[arg(short = 'a')]
    pub alpha: Option<f64>,

    /// Initial disk radius coefficient in AU, R = c √(M★/M☉) [100]
    #[arg(short = 'c')]
    pub disk_radius_coefficient: Option<f64>,

    /// Gas expulsion onset in Myr [0.6]
    #[arg(short = 'e')]
    pub gas_expulsion_onset: Option<f64>,

    /// Gas expulsion half-life in Myr [0.1]
    #[arg(short = 'E')]
    pub gas_expulsion_timescale: Option<f64>,

    /// Start time in yr [0]
    #[arg(short = 'I')]
    pub start_time: Option<f64>,

    /// Photoevaporation step in yr [2000]
    #[arg(short = 't')]
    pub timestep: Option<f64>,

    /// End time in Myr [2]
    #[arg(short = 'x')]
    pub end_time: Option<f64>,

    /// Embed the cluster in a background gas potential
    #[arg(short = 'l')]
    pub gas_presence: bool,

    /// Expel the background gas
    #[arg(short = 'k')]
    pub gas_expulsion: bool,

    /// FRIED grid file [friedgrid.dat]
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Random seed; drawn from the OS when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the run summary as JSON
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Write JSON snapshots every save interval
    #[arg(long)]
    pub snapshots: bool,
}

impl Cli {
    /// Resolve the final configuration: defaults, then `--config`, then flags.
    pub fn resolve(&self) -> Result<ClusterConfig> {
        let base = match &self.config {
            Some(path) => ClusterConfig::from_json_file(path)?,
            None => ClusterConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: ClusterConfig) -> ClusterConfig {
        if let Some(v) = self.run_number {
            config.output.run_number = v;
        }
        if let Some(v) = &self.save_path {
            config.output.path = v.clone();
        }
        if let Some(v) = self.save_interval {
            config.time.save_interval_yr = v;
        }
        if let Some(v) = self.number_of_stars {
            config.number_of_stars = v;
        }
        if let Some(v) = self.virial_radius {
            config.virial_radius_pc = v;
        }
        if let Some(v) = self.virial_ratio {
            config.virial_ratio = v;
        }
        if let Some(v) = self.alpha {
            config.disks.alpha = v;
        }
        if let Some(v) = self.disk_radius_coefficient {
            config.disks.radius_coefficient = v;
        }
        if let Some(v) = self.gas_expulsion_onset {
            config.gas.expulsion_onset_myr = v;
        }
        if let Some(v) = self.gas_expulsion_timescale {
            config.gas.expulsion_timescale_myr = v;
        }
        if let Some(v) = self.start_time {
            config.time.start_yr = v;
        }
        if let Some(v) = self.timestep {
            config.time.step_yr = v;
        }
        if let Some(v) = self.end_time {
            config.time.end_myr = v;
        }
        if self.gas_presence {
            config.gas.presence = true;
        }
        if self.gas_expulsion {
            config.gas.expulsion = true;
        }
        if let Some(v) = &self.grid {
            config.disks.grid_path = v.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(v) = &self.summary {
            config.output.summary = Some(v.clone());
        }
        if self.snapshots {
            config.output.snapshots = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["cluster"]);
        assert_eq!(cli.apply(ClusterConfig::default()), ClusterConfig::default());
    }

    #[test]
    fn short_flags_override() {
        let cli = Cli::parse_from([
            "cluster", "-N", "500", "-R", "1.5", "-Q", "0.3", "-t", "1000", "-x", "0.5", "-c", "30",
            "-n", "4", "-l", "-k", "--seed", "7",
        ]);
        let config = cli.apply(ClusterConfig::default());

        assert_eq!(config.number_of_stars, 500);
        assert_eq!(config.virial_radius_pc, 1.5);
        assert_eq!(config.virial_ratio, 0.3);
        assert_eq!(config.time.step_yr, 1000.0);
        assert_eq!(config.time.end_myr, 0.5);
        assert_eq!(config.disks.radius_coefficient, 30.0);
        assert_eq!(config.output.run_number, 4);
        assert!(config.gas.presence);
        assert!(config.gas.expulsion);
        assert_eq!(config.seed, Some(7));
        // Untouched values keep their defaults
        assert_eq!(config.disks.alpha, 1.0e-4);
    }

    #[test]
    fn flags_override_file_values() {
        let mut from_file = ClusterConfig::default();
        from_file.number_of_stars = 100;
        from_file.virial_ratio = 0.2;

        let cli = Cli::parse_from(["cluster", "-Q", "0.6"]);
        let config = cli.apply(from_file);

        assert_eq!(config.number_of_stars, 100);
        assert_eq!(config.virial_ratio, 0.6);
    }

    #[test]
    fn resolve_validates() {
        let cli = Cli::parse_from(["cluster", "-N", "1"]);
        assert!(cli.resolve().is_err());
    }
}
