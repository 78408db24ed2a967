use approx::assert_relative_eq;
use nbody::G;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::Mass;

use crate::config::ClusterConfig;
use crate::initial::{InitialConditions, new_cluster, zams_particle};
use crate::particles::{ParticleKey, ParticleSet};

fn small_config() -> ClusterConfig {
    ClusterConfig {
        number_of_stars: 200,
        ..ClusterConfig::default()
    }
}

#[test]
fn cluster_has_requested_size_and_unique_keys() {
    let config = small_config();
    let initial = new_cluster(&config, &mut ChaChaRng::seed_from_u64(1)).unwrap();

    assert_eq!(initial.stars.len(), 200);
    let mut keys: Vec<_> = initial.stars.keys().collect();
    keys.dedup();
    assert_eq!(keys.len(), 200);
}

#[test]
fn disks_go_to_stars_below_threshold() {
    let config = small_config();
    let initial = new_cluster(&config, &mut ChaChaRng::seed_from_u64(2)).unwrap();
    let bright = initial.bright_stars(&config);

    assert_eq!(bright.len() + initial.disks.len(), initial.stars.len());
    for (key, disk) in &initial.disks {
        let star = initial.stars.get(*key).unwrap();
        assert!(star.mass < Mass::from_solar_masses(1.9));
        assert!(!bright.contains(*key));
        assert_relative_eq!(
            disk.mass().to_solar_masses(),
            0.1 * star.mass.to_solar_masses(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            disk.characteristic_radius().to_au(),
            100.0 * star.mass.to_solar_masses().sqrt(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn threshold_star_is_bright() {
    let config = ClusterConfig::default();
    let stars: ParticleSet = vec![
        zams_particle(ParticleKey(0), Mass::from_solar_masses(1.9)),
        zams_particle(ParticleKey(1), Mass::from_solar_masses(1.89)),
    ]
    .into();
    let initial = InitialConditions::with_disks(stars, &config).unwrap();

    assert_eq!(initial.disks.len(), 1);
    assert_eq!(initial.disks[0].0, ParticleKey(1));
    assert!(initial.bright_stars(&config).contains(ParticleKey(0)));
}

#[test]
fn cluster_is_virialised() {
    let config = small_config();
    let initial = new_cluster(&config, &mut ChaChaRng::seed_from_u64(3)).unwrap();

    let stars: Vec<_> = initial.stars.iter().collect();
    let kinetic: f64 = stars
        .iter()
        .map(|p| 0.5 * p.mass.to_solar_masses() * p.velocity.magnitude_squared())
        .sum();
    let mut potential = 0.0;
    for (i, a) in stars.iter().enumerate() {
        for b in &stars[i + 1..] {
            let r = (a.position - b.position).magnitude();
            potential -= G * a.mass.to_solar_masses() * b.mass.to_solar_masses() / r;
        }
    }

    assert_relative_eq!(kinetic / potential.abs(), 0.5, max_relative = 1e-9);
    let total = initial.stars.total_mass().to_solar_masses();
    let virial_radius = G * total * total / (2.0 * potential.abs());
    assert_relative_eq!(virial_radius, config.virial_radius().to_au(), max_relative = 1e-9);
}

#[test]
fn same_seed_same_cluster() {
    let config = small_config();
    let a = new_cluster(&config, &mut ChaChaRng::seed_from_u64(9)).unwrap();
    let b = new_cluster(&config, &mut ChaChaRng::seed_from_u64(9)).unwrap();
    assert_eq!(a.stars, b.stars);
}
