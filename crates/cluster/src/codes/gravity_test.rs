use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use nbody::G;
use units::{Mass, Time};

use crate::codes::{GravityCode, NBodyGravity};
use crate::particles::{Attribute, Particle, ParticleKey, ParticleSet, ParticleSink, ParticleSource};

/// Equal-mass circular binary with separation `a` AU.
fn binary(a: f64) -> ParticleSet {
    let m = 1.0;
    let v = (G * 2.0 * m / a).sqrt() / 2.0;
    vec![
        Particle::new(ParticleKey(10), Mass::from_solar_masses(m))
            .with_phase_space(Point3::new(-a / 2.0, 0.0, 0.0), Vector3::new(0.0, -v, 0.0)),
        Particle::new(ParticleKey(20), Mass::from_solar_masses(m))
            .with_phase_space(Point3::new(a / 2.0, 0.0, 0.0), Vector3::new(0.0, v, 0.0)),
    ]
    .into()
}

#[test]
fn snapshot_preserves_keys_and_order() {
    let mut gravity = NBodyGravity::new(0.0, 0.01);
    gravity.add_particles(&binary(10.0)).unwrap();
    // Re-adding the same keys is a no-op
    gravity.add_particles(&binary(10.0)).unwrap();

    let snapshot = gravity.snapshot();
    assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec![ParticleKey(10), ParticleKey(20)]);
    assert_eq!(snapshot.get(ParticleKey(20)).unwrap().position, Point3::new(5.0, 0.0, 0.0));
}

#[test]
fn binary_conserves_energy() {
    let mut gravity = NBodyGravity::new(0.0, 0.01);
    gravity.add_particles(&binary(10.0)).unwrap();
    let e0 = gravity.total_energy();

    // About one orbital period: P = sqrt(a³ / M) yr
    gravity.evolve_model(Time::from_years(22.4)).unwrap();

    assert_relative_eq!(gravity.model_time().to_years(), 22.4, epsilon = 1e-9);
    assert_relative_eq!(gravity.total_energy(), e0, max_relative = 1e-3);
    assert!(gravity.potential_energy() < 0.0);
}

#[test]
fn softening_weakens_binding() {
    let mut hard = NBodyGravity::new(0.0, 0.01);
    let mut soft = NBodyGravity::new(100.0, 0.01);
    hard.add_particles(&binary(10.0)).unwrap();
    soft.add_particles(&binary(10.0)).unwrap();

    assert!(soft.potential_energy() > hard.potential_energy());
}

#[test]
fn gas_deepens_potential() {
    let mut bare = NBodyGravity::new(100.0, 0.01);
    let mut embedded = NBodyGravity::new(100.0, 0.01).with_gas(10.0, 1.0e4, None);
    bare.add_particles(&binary(1000.0)).unwrap();
    embedded.add_particles(&binary(1000.0)).unwrap();

    assert!(embedded.potential_energy() < bare.potential_energy());
    assert_eq!(embedded.kinetic_energy(), bare.kinetic_energy());
}

#[test]
fn apply_updates_masses_by_key() {
    let mut gravity = NBodyGravity::new(100.0, 0.01);
    gravity.add_particles(&binary(10.0)).unwrap();

    let evolved: ParticleSet = vec![
        Particle::new(ParticleKey(20), Mass::from_solar_masses(0.7)),
        Particle::new(ParticleKey(99), Mass::from_solar_masses(3.0)),
    ]
    .into();
    let updated = gravity.apply(&evolved, &[Attribute::Mass]).unwrap();

    assert_eq!(updated, 1);
    let snapshot = gravity.snapshot();
    assert_eq!(snapshot.get(ParticleKey(20)).unwrap().mass.to_solar_masses(), 0.7);
    assert_eq!(snapshot.get(ParticleKey(10)).unwrap().mass.to_solar_masses(), 1.0);
    // Position was not named, so it survives
    assert_eq!(snapshot.get(ParticleKey(20)).unwrap().position, Point3::new(5.0, 0.0, 0.0));
}
