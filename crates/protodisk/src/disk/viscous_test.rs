use approx::assert_relative_eq;
use units::{Length, Luminosity, Mass, Temperature};

use crate::disk::{Disk, ViscousParameters};

fn solar() -> (Mass, Luminosity) {
    (Mass::from_solar_masses(1.0), Luminosity::from_solar_luminosities(1.0))
}

#[test]
fn default_parameters() {
    let p = ViscousParameters::default();
    assert_eq!(p.temperature_profile, 0.5);
    assert_eq!(p.reference_radius.to_au(), 1.0);
    assert_eq!(p.reference_temperature, Temperature::from_kelvin(280.0));
    assert_eq!(p.molar_mass, 2.3);
    assert_eq!(p.viscosity_exponent, 1.0);
}

#[test]
fn solar_disk_timescale() {
    let disk = Disk::new(Mass::from_solar_masses(0.1), Length::from_au(100.0)).unwrap();
    let (mass, luminosity) = solar();

    let tau = disk.viscous_timescale(mass, luminosity, 1.0e-3, &ViscousParameters::default());

    // μ R (G M)^½ / (3 α R_gas T) with R = 100 AU, T = 280 K
    assert_relative_eq!(tau.to_myr(), 4.6497, max_relative = 1e-3);
}

#[test]
fn timescale_scalings() {
    let params = ViscousParameters::default();
    let (mass, luminosity) = solar();
    let small = Disk::new(Mass::from_solar_masses(0.1), Length::from_au(50.0)).unwrap();
    let large = Disk::new(Mass::from_solar_masses(0.1), Length::from_au(100.0)).unwrap();

    let base = small.viscous_timescale(mass, luminosity, 1.0e-3, &params).to_years();

    // τ ∝ R for q = 1/2
    let wider = large.viscous_timescale(mass, luminosity, 1.0e-3, &params).to_years();
    assert_relative_eq!(wider / base, 2.0, max_relative = 1e-12);

    // τ ∝ 1/α
    let turbulent = small.viscous_timescale(mass, luminosity, 1.0e-2, &params).to_years();
    assert_relative_eq!(base / turbulent, 10.0, max_relative = 1e-12);

    // τ ∝ L^-1/4
    let bright = small
        .viscous_timescale(mass, Luminosity::from_solar_luminosities(16.0), 1.0e-3, &params)
        .to_years();
    assert_relative_eq!(base / bright, 2.0, max_relative = 1e-12);

    // τ ∝ M^1/2
    let heavy = small
        .viscous_timescale(Mass::from_solar_masses(4.0), luminosity, 1.0e-3, &params)
        .to_years();
    assert_relative_eq!(heavy / base, 2.0, max_relative = 1e-12);
}
