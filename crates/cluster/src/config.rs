//! Run configuration.
//!
//! Values come from [`ClusterConfig::default`], optionally overridden by a
//! JSON file and then by command-line flags. Missing JSON fields keep their
//! defaults.

use protodisk::ViscousParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use units::{Length, Mass, Time};

use crate::error::{Error, Result};

/// Top-level configuration of a cluster run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterConfig {
    /// Number of stars
    pub number_of_stars: usize,
    /// Virial radius (pc)
    pub virial_radius_pc: f64,
    /// Kinetic over potential energy of the initial cluster
    pub virial_ratio: f64,
    /// Upper end of the Kroupa IMF (M☉)
    pub max_stellar_mass: f64,
    pub seed: Option<u64>,

    pub disks: DiskConfig,
    pub gravity: GravityConfig,
    pub stellar: StellarConfig,
    pub gas: GasConfig,
    pub time: TimeConfig,
    pub output: OutputConfig,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            number_of_stars: 2000,
            virial_radius_pc: 0.5,
            virial_ratio: 0.5,
            max_stellar_mass: 100.0,
            seed: None,
            disks: DiskConfig::default(),
            gravity: GravityConfig::default(),
            stellar: StellarConfig::default(),
            gas: GasConfig::default(),
            time: TimeConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Which stars carry disks and how large the disks start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskConfig {
    /// Stars at or above this mass (M☉) are FUV sources without a disk
    pub bright_star_threshold: f64,
    /// Disk mass as a fraction of the host mass
    pub mass_fraction: f64,
    /// Initial radius `coefficient · √(M★/M☉)` AU
    pub radius_coefficient: f64,
    /// Turbulence parameter α of the viscous timescale
    pub alpha: f64,
    pub viscous: ViscousParameters,
    /// FRIED grid file
    pub grid_path: PathBuf,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            bright_star_threshold: 1.9,
            mass_fraction: 0.1,
            radius_coefficient: 100.0,
            alpha: 1.0e-4,
            viscous: ViscousParameters::default(),
            grid_path: PathBuf::from("friedgrid.dat"),
        }
    }
}

/// Softened direct N-body code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GravityConfig {
    /// Plummer softening ε (AU)
    pub softening_au: f64,
    /// Accuracy parameter η of the substep criterion
    pub timestep_parameter: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            softening_au: 100.0,
            timestep_parameter: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StellarConfig {
    /// Metallicity, mass fraction
    pub metallicity: f64,
}

impl Default for StellarConfig {
    fn default() -> Self {
        Self {
            metallicity: stellar::SOLAR_METALLICITY,
        }
    }
}

/// Residual gas of the embedded cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GasConfig {
    /// Add the background Plummer gas potential
    pub presence: bool,
    /// Disperse the gas after `expulsion_onset_myr`
    pub expulsion: bool,
    pub expulsion_onset_myr: f64,
    /// Time for half of the remaining gas to leave (Myr)
    pub expulsion_timescale_myr: f64,
    /// Gas mass over stellar mass
    pub mass_ratio: f64,
    /// Gas Plummer radius over `plummer_radius_pc`
    pub radius_ratio: f64,
    pub plummer_radius_pc: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            presence: false,
            expulsion: false,
            expulsion_onset_myr: 0.6,
            expulsion_timescale_myr: 0.1,
            mass_ratio: 2.0,
            radius_ratio: 1.0,
            plummer_radius_pc: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeConfig {
    pub start_yr: f64,
    /// Step between photoevaporation updates (yr)
    pub step_yr: f64,
    pub end_myr: f64,
    /// Spacing of snapshots (yr)
    pub save_interval_yr: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            start_yr: 0.0,
            step_yr: 2000.0,
            end_myr: 2.0,
            save_interval_yr: 50_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub run_number: u32,
    pub path: PathBuf,
    /// Write JSON snapshots every save interval
    pub snapshots: bool,
    /// Write the run summary as JSON to this file
    pub summary: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_number: 0,
            path: PathBuf::from("."),
            snapshots: false,
            summary: None,
        }
    }
}

impl ClusterConfig {
    /// Defaults overridden by the fields present in a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn virial_radius(&self) -> Length {
        Length::from_parsecs(self.virial_radius_pc)
    }

    pub fn bright_star_threshold(&self) -> Mass {
        Mass::from_solar_masses(self.disks.bright_star_threshold)
    }

    pub fn start_time(&self) -> Time {
        Time::from_years(self.time.start_yr)
    }

    pub fn end_time(&self) -> Time {
        Time::from_myr(self.time.end_myr)
    }

    pub fn timestep(&self) -> Time {
        Time::from_years(self.time.step_yr)
    }

    pub fn save_interval(&self) -> Time {
        Time::from_years(self.time.save_interval_yr)
    }

    /// Directory receiving this run's snapshots: `<path>/run_<n>`.
    pub fn run_directory(&self) -> PathBuf {
        self.output.path.join(format!("run_{}", self.output.run_number))
    }

    /// Reject values no run can start from.
    pub fn validate(&self) -> Result<()> {
        self.validate_cluster()?;
        self.validate_run()
    }

    /// Checks on the parameters that only shape a generated cluster.
    pub fn validate_cluster(&self) -> Result<()> {
        if self.number_of_stars < 2 {
            return Err(Error::Config(format!(
                "a cluster needs at least 2 stars, got {}",
                self.number_of_stars
            )));
        }
        positive("virial radius", self.virial_radius_pc)?;
        positive("virial ratio", self.virial_ratio)?;
        if self.max_stellar_mass <= 0.01 {
            return Err(Error::Config(format!(
                "maximum stellar mass must exceed 0.01 M☉, got {}",
                self.max_stellar_mass
            )));
        }

        positive("disk mass fraction", self.disks.mass_fraction)?;
        positive("disk radius coefficient", self.disks.radius_coefficient)?;
        Ok(())
    }

    /// Checks on everything a run needs whatever its initial conditions.
    pub fn validate_run(&self) -> Result<()> {
        positive("bright star threshold", self.disks.bright_star_threshold)?;
        positive("turbulence parameter", self.disks.alpha)?;
        positive("molar mass", self.disks.viscous.molar_mass)?;
        if self.disks.viscous.viscosity_exponent == 2.0 {
            return Err(Error::Config("viscosity exponent must differ from 2".to_string()));
        }

        non_negative("softening", self.gravity.softening_au)?;
        positive("timestep parameter", self.gravity.timestep_parameter)?;
        if !(self.stellar.metallicity > 0.0 && self.stellar.metallicity < 1.0) {
            return Err(Error::Config(format!(
                "metallicity must lie in (0, 1), got {}",
                self.stellar.metallicity
            )));
        }

        if self.gas.presence {
            non_negative("gas mass ratio", self.gas.mass_ratio)?;
            positive("gas radius ratio", self.gas.radius_ratio)?;
            positive("gas Plummer radius", self.gas.plummer_radius_pc)?;
            if self.gas.expulsion {
                non_negative("gas expulsion onset", self.gas.expulsion_onset_myr)?;
                positive("gas expulsion timescale", self.gas.expulsion_timescale_myr)?;
            }
        }

        non_negative("start time", self.time.start_yr)?;
        positive("timestep", self.time.step_yr)?;
        positive("save interval", self.time.save_interval_yr)?;
        if self.end_time() <= self.start_time() {
            return Err(Error::Config(format!(
                "end time {} Myr must be after start time {} yr",
                self.time.end_myr, self.time.start_yr
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::Config(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::Config(format!("{name} must not be negative, got {value}")))
    }
}
