use units::{Mass, Time};

use crate::codes::{AnalyticStellarEvolution, StellarEvolutionCode};
use crate::particles::{Particle, ParticleKey, ParticleSet, ParticleSource};

fn bright_stars() -> ParticleSet {
    vec![
        Particle::new(ParticleKey(3), Mass::from_solar_masses(5.0)),
        Particle::new(ParticleKey(8), Mass::from_solar_masses(60.0)),
    ]
    .into()
}

#[test]
fn snapshot_carries_stellar_properties() {
    let mut stellar = AnalyticStellarEvolution::new(0.02);
    stellar.add_particles(&bright_stars()).unwrap();

    let snapshot = stellar.snapshot();
    assert_eq!(snapshot.len(), 2);
    let star = snapshot.get(ParticleKey(3)).unwrap();
    assert_eq!(star.mass, Mass::from_solar_masses(5.0));
    assert!(star.luminosity.to_solar_luminosities() > 100.0);
    assert!(star.radius.to_solar_radii() > 1.0);
    assert!(star.temperature.to_kelvin() > 9000.0);
}

#[test]
fn evolution_advances_model_time() {
    let mut stellar = AnalyticStellarEvolution::new(0.02);
    stellar.add_particles(&bright_stars()).unwrap();
    stellar.evolve_model(Time::from_myr(1.0)).unwrap();

    assert_eq!(stellar.model_time().to_myr(), 1.0);
    assert_eq!(stellar.population().len(), 2);
}

#[test]
fn massive_star_loses_mass_late() {
    let mut stellar = AnalyticStellarEvolution::new(0.02);
    stellar.add_particles(&bright_stars()).unwrap();

    // 60 M☉ lives 3 Myr and is a giant after 2.7 Myr
    stellar.evolve_model(Time::from_myr(2.85)).unwrap();
    let mass = stellar.snapshot().get(ParticleKey(8)).unwrap().mass;
    assert!(mass < Mass::from_solar_masses(60.0));
}

#[test]
fn suggested_timestep_comes_from_population() {
    let mut stellar = AnalyticStellarEvolution::new(0.02);
    assert!(stellar.suggested_timestep().is_none());

    stellar.add_particles(&bright_stars()).unwrap();
    let dt = stellar.suggested_timestep().unwrap();
    assert!((dt.to_years() - 0.01 * 0.9 * 3.0e6).abs() < 1e-6);
}
