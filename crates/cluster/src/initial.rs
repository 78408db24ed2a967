//! Initial conditions of a young cluster.
//!
//! Kroupa masses on a Plummer sphere scaled to the requested virial radius
//! and virial ratio. Stars below the bright-star threshold receive a disk.

use log::info;
use protodisk::Disk;
use rand_chacha::ChaChaRng;
use stellar::BrokenPowerLaw;
use stellar::main_sequence::{radius_from_luminosity, zams_properties};
use units::Mass;

use crate::config::ClusterConfig;
use crate::error::{Error, Result};
use crate::particles::{Particle, ParticleKey, ParticleSet};

/// Stars of a new cluster and the disks of the small ones.
#[derive(Debug, Clone)]
pub struct InitialConditions {
    pub stars: ParticleSet,
    /// Disk per small star, in star order
    pub disks: Vec<(ParticleKey, Disk)>,
}

impl InitialConditions {
    /// Assign disks to the stars of `stars` below the threshold.
    ///
    /// Disk mass is `mass_fraction · M★`, radius `coefficient · √(M★/M☉)` AU.
    pub fn with_disks(stars: ParticleSet, config: &ClusterConfig) -> Result<Self> {
        let threshold = config.bright_star_threshold();
        let disks = stars
            .iter()
            .filter(|p| p.mass < threshold)
            .map(|p| {
                let disk = Disk::for_star(p.mass, config.disks.mass_fraction, config.disks.radius_coefficient)?;
                Ok((p.key, disk))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { stars, disks })
    }

    pub fn bright_stars(&self, config: &ClusterConfig) -> ParticleSet {
        let threshold = config.bright_star_threshold();
        self.stars.select(|p| p.mass >= threshold)
    }
}

/// Draw a cluster from `config`.
pub fn new_cluster(config: &ClusterConfig, rng: &mut ChaChaRng) -> Result<InitialConditions> {
    let imf = BrokenPowerLaw::kroupa(config.max_stellar_mass).ok_or_else(|| {
        Error::Config(format!("no IMF below {} M☉", config.max_stellar_mass))
    })?;
    let masses = imf.sample_many(rng, config.number_of_stars);

    let mut state = nbody::plummer::plummer_sphere(&masses, rng);
    state.scale_to_standard(config.virial_radius().to_au(), config.virial_ratio);

    let stars: ParticleSet = state
        .bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            zams_particle(ParticleKey(i as u64), Mass::from_solar_masses(body.mass))
                .with_phase_space(body.position, body.velocity)
        })
        .collect();

    let initial = InitialConditions::with_disks(stars, config)?;
    info!(
        "cluster of {} stars, {:.1} M☉, {} with disks",
        initial.stars.len(),
        initial.stars.total_mass().to_solar_masses(),
        initial.disks.len()
    );
    Ok(initial)
}

/// A star at rest at the origin with zero-age main-sequence properties.
pub fn zams_particle(key: ParticleKey, mass: Mass) -> Particle {
    let (luminosity, temperature) = zams_properties(mass);
    let mut particle = Particle::new(key, mass);
    particle.luminosity = luminosity;
    particle.temperature = temperature;
    particle.radius = radius_from_luminosity(luminosity, temperature);
    particle
}
