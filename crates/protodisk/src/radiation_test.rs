use approx::assert_relative_eq;
use nalgebra::Point3;
use units::{Length, Luminosity, Mass};

use crate::radiation::{distance, fuv_luminosity, radiation_at_distance};

const BOUNDARIES: [f64; 10] = [0.12, 0.24, 0.56, 0.70, 0.91, 1.37, 2.07, 3.72, 10.0, 20.2];

fn fuv(m: f64) -> f64 {
    fuv_luminosity(Mass::from_solar_masses(m)).to_solar_luminosities()
}

#[test]
fn luminosity_is_zero_on_boundaries() {
    for m in BOUNDARIES {
        assert_eq!(fuv(m), 0.0, "boundary {m}");
    }
}

#[test]
fn luminosity_is_zero_below_fit() {
    assert_eq!(fuv(0.0), 0.0);
    assert_eq!(fuv(0.05), 0.0);
    assert_eq!(fuv(0.12), 0.0);
}

#[test]
fn luminosity_increases_inside_each_segment() {
    let mut edges = BOUNDARIES.to_vec();
    edges.push(100.0);

    for pair in edges.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        let width = upper - lower;
        let samples: Vec<f64> = (1..10)
            .map(|k| fuv(lower + width * k as f64 / 10.0))
            .collect();

        assert!(samples.iter().all(|&l| l > 0.0), "segment {lower}..{upper}");
        for s in samples.windows(2) {
            assert!(s[1] > s[0], "segment {lower}..{upper} not increasing");
        }
    }
}

#[test]
fn luminosity_matches_segment_formula() {
    assert_relative_eq!(fuv(5.0), 6.99075e-1 * 5.0_f64.powf(3.8058), max_relative = 1e-12);
    assert_relative_eq!(fuv(1.0), 1.02477e-4, max_relative = 1e-12);
    // The top segment has no upper bound
    assert_relative_eq!(fuv(150.0), 1.31175e2 * 150.0_f64.powf(1.7974), max_relative = 1e-12);
}

#[test]
fn distance_is_euclidean() {
    let a = Point3::new(1.0, 2.0, 3.0);
    let b = Point3::new(4.0, 6.0, 3.0);

    assert_relative_eq!(distance(&a, &b).to_au(), 5.0, epsilon = 1e-12);
    assert_eq!(distance(&a, &b), distance(&b, &a));
}

#[test]
fn radiation_follows_inverse_square() {
    let luminosity = Luminosity::from_solar_luminosities(100.0);
    let near = radiation_at_distance(luminosity, Length::from_au(100.0));
    let far = radiation_at_distance(luminosity, Length::from_au(200.0));

    assert_relative_eq!(near.to_erg_per_s_cm2() / far.to_erg_per_s_cm2(), 4.0, max_relative = 1e-12);
}

#[test]
fn radiation_in_g0() {
    let luminosity = Luminosity::from_erg_per_second(4.0 * std::f64::consts::PI);
    let flux = radiation_at_distance(luminosity, Length::from_cm(1.0));

    assert_relative_eq!(flux.to_erg_per_s_cm2(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(flux.to_g0(), 625.0, max_relative = 1e-12);
}

#[test]
fn zero_distance_is_infinite() {
    let flux = radiation_at_distance(Luminosity::from_solar_luminosities(1.0), Length::zero());
    assert!(flux.to_erg_per_s_cm2().is_infinite());
}
