//! End-of-run summary.

use protodisk::{Disk, DiskError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use units::Mass;

use crate::error::Result;
use crate::particles::ParticleKey;

/// What accumulated photoevaporation left of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FinalDisk {
    /// Nothing was lost, so no finite radius is singled out.
    Unchanged,
    /// The remaining mass sits inside `radius_au`.
    #[serde(rename_all = "camelCase")]
    Truncated { radius_au: f64 },
    /// At least the whole disk mass was lost.
    Dispersed,
}

impl FinalDisk {
    pub fn after_loss(disk: &Disk, mass_lost: Mass) -> Result<Self> {
        if mass_lost <= Mass::zero() {
            return Ok(FinalDisk::Unchanged);
        }
        let remaining = disk.mass() - mass_lost;
        if remaining <= Mass::zero() {
            return Ok(FinalDisk::Dispersed);
        }
        match disk.radius_containing_mass(remaining) {
            Ok(radius) => Ok(FinalDisk::Truncated {
                radius_au: radius.to_au(),
            }),
            // Loss below floating-point resolution of the disk mass
            Err(DiskError::EnclosedMassNotBelowTotal) => Ok(FinalDisk::Unchanged),
            Err(e) => Err(e.into()),
        }
    }
}

impl fmt::Display for FinalDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalDisk::Unchanged => write!(f, "unchanged"),
            FinalDisk::Truncated { radius_au } => write!(f, "{radius_au:.2} AU"),
            FinalDisk::Dispersed => write!(f, "dispersed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSummary {
    pub key: ParticleKey,
    pub stellar_mass_msun: f64,
    pub disk_mass_msun: f64,
    pub initial_radius_au: f64,
    pub mass_lost_msun: f64,
    pub final_disk: FinalDisk,
    pub viscous_timescale_myr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_number: u32,
    pub number_of_stars: usize,
    pub bright_stars: usize,
    pub start_time_yr: f64,
    pub end_time_yr: f64,
    pub steps: usize,
    /// Gravity-code energy at the start (M☉ AU² yr⁻²)
    pub initial_energy: f64,
    /// Energy drift summed over all gravity steps
    pub energy_change: f64,
    pub relative_energy_error: f64,
    pub disks: Vec<DiskSummary>,
}

impl RunSummary {
    pub fn total_mass_lost(&self) -> f64 {
        self.disks.iter().map(|d| d.mass_lost_msun).sum()
    }

    pub fn dispersed(&self) -> usize {
        self.disks
            .iter()
            .filter(|d| d.final_disk == FinalDisk::Dispersed)
            .count()
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "run {}: {} stars ({} bright), {:.0} -> {:.0} yr in {} steps",
            self.run_number,
            self.number_of_stars,
            self.bright_stars,
            self.start_time_yr,
            self.end_time_yr,
            self.steps
        )?;
        writeln!(f, "relative energy error: {:.3e}", self.relative_energy_error)?;
        writeln!(
            f,
            "total mass loss: {:.4e} M☉ over {} disks, {} dispersed",
            self.total_mass_lost(),
            self.disks.len(),
            self.dispersed()
        )?;
        writeln!(
            f,
            "{:>6} {:>8} {:>10} {:>10} {:>12} {:>12} {:>10}",
            "key", "M★", "Mdisk", "R0 [AU]", "lost [M☉]", "R1", "τν [Myr]"
        )?;
        for d in &self.disks {
            writeln!(
                f,
                "{:>6} {:>8.3} {:>10.4} {:>10.2} {:>12.4e} {:>12} {:>10.3}",
                d.key.0,
                d.stellar_mass_msun,
                d.disk_mass_msun,
                d.initial_radius_au,
                d.mass_lost_msun,
                d.final_disk.to_string(),
                d.viscous_timescale_myr
            )?;
        }
        Ok(())
    }
}
