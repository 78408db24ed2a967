use approx::assert_relative_eq;
use units::{Length, Mass};

use crate::disk::{Disk, DiskError};

fn disk() -> Disk {
    Disk::new(Mass::from_solar_masses(0.03), Length::from_au(50.0)).unwrap()
}

#[test]
fn new_rejects_degenerate_disks() {
    let radius = Length::from_au(50.0);
    assert_eq!(Disk::new(Mass::zero(), radius), Err(DiskError::NonPositiveMass));
    assert_eq!(
        Disk::new(Mass::from_solar_masses(-0.1), radius),
        Err(DiskError::NonPositiveMass)
    );
    assert_eq!(
        Disk::new(Mass::from_solar_masses(f64::NAN), radius),
        Err(DiskError::NonPositiveMass)
    );
    assert_eq!(
        Disk::new(Mass::from_solar_masses(0.01), Length::zero()),
        Err(DiskError::NonPositiveRadius)
    );
}

#[test]
fn for_star_scales_with_stellar_mass() {
    let disk = Disk::for_star(Mass::from_solar_masses(0.3), 0.1, 100.0).unwrap();

    assert_relative_eq!(disk.mass().to_solar_masses(), 0.03, max_relative = 1e-12);
    assert_relative_eq!(
        disk.characteristic_radius().to_au(),
        100.0 * 0.3_f64.sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn zero_enclosed_mass_sits_at_center() {
    assert_eq!(disk().radius_containing_mass(Mass::zero()).unwrap().to_au(), 0.0);
}

#[test]
fn characteristic_radius_encloses_one_minus_inverse_e() {
    let d = disk();
    let enclosed = d.mass() * (1.0 - (-1.0_f64).exp());
    let r = d.radius_containing_mass(enclosed).unwrap();
    assert_relative_eq!(r.to_au(), 50.0, max_relative = 1e-9);
}

#[test]
fn radius_grows_with_enclosed_mass() {
    let d = disk();
    let radii: Vec<f64> = [0.1, 0.3, 0.5, 0.9, 0.99, 0.9999]
        .iter()
        .map(|f| d.radius_containing_mass(d.mass() * *f).unwrap().to_au())
        .collect();

    for pair in radii.windows(2) {
        assert!(pair[1] > pair[0], "{pair:?}");
    }
}

#[test]
fn remaining_mass_after_photoevaporation() {
    let d = disk();
    let remaining = d.mass() - Mass::from_solar_masses(2.0e-4);
    let r = d.radius_containing_mass(remaining).unwrap();

    assert_relative_eq!(r.to_au(), 50.0 * 150.0_f64.ln(), max_relative = 1e-9);
}

#[test]
fn total_or_negative_mass_is_rejected() {
    let d = disk();
    assert_eq!(
        d.radius_containing_mass(d.mass()),
        Err(DiskError::EnclosedMassNotBelowTotal)
    );
    assert_eq!(
        d.radius_containing_mass(d.mass() * 2.0),
        Err(DiskError::EnclosedMassNotBelowTotal)
    );
    assert_eq!(
        d.radius_containing_mass(Mass::from_solar_masses(-1.0e-3)),
        Err(DiskError::NegativeEnclosedMass)
    );
}
