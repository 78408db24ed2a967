//! The coupled cluster time loop.
//!
//! Each step evolves stellar evolution to the half step, copies masses into
//! gravity, advances gravity to the full step, accumulates the FUV-driven disk
//! mass loss of every (bright, small) pair and finally completes the stellar
//! step before synchronising the framework set.

use log::{debug, info, warn};
use nbody::forces::GasExpulsion;
use protodisk::{Disk, FriedGrid, FriedQuery, distance, fuv_luminosity, radiation_at_distance};
use units::{Mass, Time};

use crate::codes::{AnalyticStellarEvolution, GravityCode, NBodyGravity, StellarEvolutionCode};
use crate::config::ClusterConfig;
use crate::error::Result;
use crate::initial::InitialConditions;
use crate::particles::{Attribute, Channel, ParticleKey, ParticleSet};
use crate::report::{DiskSummary, FinalDisk, RunSummary};
use crate::snapshot::SnapshotWriter;

/// An FUV source and the mass it was born with.
///
/// The luminosity fit is applied to the birth mass throughout the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightStar {
    pub key: ParticleKey,
    pub initial_mass: Mass,
}

/// A low-mass star, its disk and the mass photoevaporated from it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallStar {
    pub key: ParticleKey,
    pub disk: Disk,
    pub mass_lost: Mass,
}

pub struct ClusterSimulation {
    config: ClusterConfig,
    grid: FriedGrid,
    stars: ParticleSet,
    bright: Vec<BrightStar>,
    small: Vec<SmallStar>,
    gravity: Box<dyn GravityCode>,
    stellar: Box<dyn StellarEvolutionCode>,
    stellar_to_gravity: Channel,
    stellar_to_framework: Channel,
    gravity_to_framework: Channel,
    time: Time,
    steps: usize,
    initial_energy: f64,
    energy_change: f64,
    next_save: Time,
    snapshots: Option<SnapshotWriter>,
}

impl ClusterSimulation {
    /// Load every star into gravity and the bright ones into stellar evolution,
    /// then bring both codes to the configured start time.
    pub fn new(
        config: ClusterConfig,
        grid: FriedGrid,
        initial: InitialConditions,
        mut gravity: Box<dyn GravityCode>,
        mut stellar: Box<dyn StellarEvolutionCode>,
    ) -> Result<Self> {
        config.validate_run()?;
        let bright_stars = initial.bright_stars(&config);
        gravity.add_particles(&initial.stars)?;
        stellar.add_particles(&bright_stars)?;

        let start = config.start_time();
        if start > Time::zero() {
            stellar.evolve_model(start)?;
            gravity.evolve_model(start)?;
        }

        let mut simulation = Self {
            grid,
            stars: initial.stars,
            bright: bright_stars
                .iter()
                .map(|p| BrightStar {
                    key: p.key,
                    initial_mass: p.mass,
                })
                .collect(),
            small: initial
                .disks
                .into_iter()
                .map(|(key, disk)| SmallStar {
                    key,
                    disk,
                    mass_lost: Mass::zero(),
                })
                .collect(),
            gravity,
            stellar,
            stellar_to_gravity: Channel::new("stellar -> gravity", &[Attribute::Mass]),
            stellar_to_framework: Channel::new("stellar -> framework", &Attribute::STELLAR),
            gravity_to_framework: Channel::new("gravity -> framework", &Attribute::DYNAMICAL),
            time: start,
            steps: 0,
            initial_energy: 0.0,
            energy_change: 0.0,
            next_save: start + config.save_interval(),
            snapshots: None,
            config,
        };
        simulation.synchronise()?;
        simulation.initial_energy = simulation.gravity.total_energy();

        info!(
            "{} bright stars, {} disks, E0 = {:.6e}",
            simulation.bright.len(),
            simulation.small.len(),
            simulation.initial_energy
        );
        Ok(simulation)
    }

    /// Couple the in-process codes configured by `config`.
    pub fn from_config(config: ClusterConfig, grid: FriedGrid, initial: InitialConditions) -> Result<Self> {
        let mut gravity = NBodyGravity::new(config.gravity.softening_au, config.gravity.timestep_parameter);
        if config.gas.presence {
            let gas = &config.gas;
            let mass = gas.mass_ratio * initial.stars.total_mass().to_solar_masses();
            let radius = gas.radius_ratio * units::Length::from_parsecs(gas.plummer_radius_pc).to_au();
            let expulsion = gas.expulsion.then(|| GasExpulsion {
                onset: Time::from_myr(gas.expulsion_onset_myr).to_years(),
                half_life: Time::from_myr(gas.expulsion_timescale_myr).to_years(),
            });
            info!("gas potential of {mass:.1} M☉ within {radius:.0} AU, expulsion {}", gas.expulsion);
            gravity = gravity.with_gas(mass, radius, expulsion);
        }
        let stellar = AnalyticStellarEvolution::new(config.stellar.metallicity);
        Self::new(config, grid, initial, Box::new(gravity), Box::new(stellar))
    }

    /// Write a JSON snapshot at every save interval into `writer`'s directory.
    pub fn with_snapshots(mut self, writer: SnapshotWriter) -> Self {
        self.snapshots = Some(writer);
        self
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn stars(&self) -> &ParticleSet {
        &self.stars
    }

    pub fn small_stars(&self) -> &[SmallStar] {
        &self.small
    }

    pub fn bright_stars(&self) -> &[BrightStar] {
        &self.bright
    }

    pub fn is_finished(&self) -> bool {
        self.time >= self.config.end_time()
    }

    /// Next step length: the configured step, shortened by the stellar code and
    /// by the end of the run.
    pub fn next_timestep(&self) -> Time {
        let mut dt = self.config.timestep().min(self.config.end_time() - self.time);
        if let Some(suggested) = self.stellar.suggested_timestep() {
            dt = dt.min(suggested);
        }
        dt
    }

    /// Advance one step; returns its length.
    pub fn step(&mut self) -> Result<Time> {
        let dt = self.next_timestep();
        let half = self.time + dt * 0.5;
        let full = self.time + dt;

        self.stellar.evolve_model(half)?;
        self.stellar_to_gravity.copy(&*self.stellar, &mut *self.gravity)?;

        let energy_before = self.gravity.total_energy();
        self.gravity.evolve_model(full)?;
        self.energy_change += self.gravity.total_energy() - energy_before;

        photoevaporate(&self.grid, &self.stars, &self.bright, &mut self.small, dt)?;

        self.stellar.evolve_model(full)?;
        self.synchronise()?;

        self.time = full;
        let end = self.config.end_time();
        // Rounding can leave a sliver before the end time
        if (end - self.time).to_years() <= 1e-9 * end.to_years().max(1.0) {
            self.time = end;
        }
        self.steps += 1;
        debug!(
            "step {} to {:.1} yr (dt {:.1} yr), dE = {:.3e}",
            self.steps,
            self.time.to_years(),
            dt.to_years(),
            self.energy_change
        );

        self.save_due_snapshots()?;
        Ok(dt)
    }

    /// Step until the end time and summarise.
    pub fn run(&mut self) -> Result<RunSummary> {
        info!(
            "running from {:.0} yr to {:.3} Myr",
            self.time.to_years(),
            self.config.end_time().to_myr()
        );
        while !self.is_finished() {
            self.step()?;
        }
        self.summary()
    }

    pub fn summary(&self) -> Result<RunSummary> {
        let alpha = self.config.disks.alpha;
        let viscous = &self.config.disks.viscous;

        let disks = self
            .small
            .iter()
            .map(|small| {
                let host = self.stars.require(small.key)?;
                let final_disk = FinalDisk::after_loss(&small.disk, small.mass_lost)?;
                if final_disk == FinalDisk::Dispersed {
                    warn!(
                        "disk of star {} dispersed: lost {:.3e} of {:.3e} M☉",
                        small.key.0,
                        small.mass_lost.to_solar_masses(),
                        small.disk.mass().to_solar_masses()
                    );
                }
                Ok(DiskSummary {
                    key: small.key,
                    stellar_mass_msun: host.mass.to_solar_masses(),
                    disk_mass_msun: small.disk.mass().to_solar_masses(),
                    initial_radius_au: small.disk.characteristic_radius().to_au(),
                    mass_lost_msun: small.mass_lost.to_solar_masses(),
                    final_disk,
                    viscous_timescale_myr: small
                        .disk
                        .viscous_timescale(host.mass, host.luminosity, alpha, viscous)
                        .to_myr(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let relative_energy_error = if self.initial_energy != 0.0 {
            self.energy_change / self.initial_energy
        } else {
            0.0
        };

        Ok(RunSummary {
            run_number: self.config.output.run_number,
            number_of_stars: self.stars.len(),
            bright_stars: self.bright.len(),
            start_time_yr: self.config.time.start_yr,
            end_time_yr: self.time.to_years(),
            steps: self.steps,
            initial_energy: self.initial_energy,
            energy_change: self.energy_change,
            relative_energy_error,
            disks,
        })
    }

    fn synchronise(&mut self) -> Result<()> {
        self.stellar_to_gravity.copy(&*self.stellar, &mut *self.gravity)?;
        self.stellar_to_framework.copy(&*self.stellar, &mut self.stars)?;
        self.gravity_to_framework.copy(&*self.gravity, &mut self.stars)?;
        Ok(())
    }

    fn save_due_snapshots(&mut self) -> Result<()> {
        let interval = self.config.save_interval();
        while self.time >= self.next_save {
            info!(
                "t = {:.3} Myr, accumulated disk mass loss {:.4e} M☉",
                self.time.to_myr(),
                self.small.iter().map(|s| s.mass_lost).sum::<Mass>().to_solar_masses()
            );
            if let Some(writer) = self.snapshots.as_mut() {
                writer.write(self.time, &self.stars)?;
            }
            self.next_save = self.next_save + interval;
        }
        Ok(())
    }
}

/// Add one step of photoevaporative mass loss to every small star.
///
/// Every bright star irradiates every small star. Luminosities follow the
/// FUV fit for the bright star's initial mass, and each lookup uses the
/// small star's initial disk.
pub fn photoevaporate(
    grid: &FriedGrid,
    stars: &ParticleSet,
    bright: &[BrightStar],
    small: &mut [SmallStar],
    dt: Time,
) -> Result<()> {
    for star in bright {
        let source = stars.require(star.key)?;
        let luminosity = fuv_luminosity(star.initial_mass);

        for target in small.iter_mut() {
            let host = stars.require(target.key)?;
            let flux = radiation_at_distance(luminosity, distance(&source.position, &host.position));
            let query = FriedQuery {
                stellar_mass: host.mass,
                fuv: flux,
                disk_mass: target.disk.mass(),
                disk_radius: target.disk.characteristic_radius(),
            };
            target.mass_lost += grid.mass_lost(&query, dt)?;
        }
    }
    Ok(())
}
