//! Plummer-sphere initial conditions.
//!
//! Positions and velocities are drawn with the rejection scheme of Aarseth,
//! Hénon & Wielen (1974) in Hénon units, then mapped onto the supplied masses.
//! Callers normally follow up with [`ClusterState::scale_to_standard`] to set
//! the physical virial radius and virial ratio.

use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::state::ClusterState;

/// Fraction of the (infinite) Plummer mass sampled; avoids far outliers
const MASS_CUTOFF: f64 = 0.999;

/// Sample a point uniformly on the unit sphere
fn random_direction(rng: &mut ChaChaRng) -> Vector3<f64> {
    let cos_theta: f64 = rng.random_range(-1.0..=1.0);
    let phi: f64 = rng.random_range(0.0..2.0 * PI);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Radius (in Plummer scale lengths) enclosing a random mass fraction
fn sample_radius(rng: &mut ChaChaRng) -> f64 {
    let x: f64 = rng.random_range(f64::EPSILON..MASS_CUTOFF);
    1.0 / (x.powf(-2.0 / 3.0) - 1.0).sqrt()
}

/// Speed in units of the local escape speed, from g(q) = q² (1 - q²)^(7/2)
fn sample_speed_fraction(rng: &mut ChaChaRng) -> f64 {
    loop {
        let q: f64 = rng.random();
        let y: f64 = rng.random_range(0.0..0.1);
        if y < q * q * (1.0 - q * q).powf(3.5) {
            return q;
        }
    }
}

/// Build a cluster with the given masses (M☉) on a Plummer distribution
///
/// The result is in Hénon units (G = M = 1 scale, total energy -1/4)
/// applied to positions and velocities only; rescale with
/// [`ClusterState::scale_to_standard`] before integrating.
///
/// # Examples
///
/// ```
/// use nbody::plummer::plummer_sphere;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let mut cluster = plummer_sphere(&[1.0; 100], &mut rng);
/// cluster.scale_to_standard(103_132.0, 0.5);
///
/// assert_eq!(cluster.body_count(), 100);
/// ```
pub fn plummer_sphere(masses: &[f64], rng: &mut ChaChaRng) -> ClusterState {
    let length_scale = 3.0 * PI / 16.0;
    let velocity_scale = 1.0 / length_scale.sqrt();

    let mut cluster = ClusterState::new();
    for &mass in masses {
        let r = sample_radius(rng);
        let position = random_direction(rng) * (r * length_scale);

        let escape_speed = 2f64.sqrt() * (1.0 + r * r).powf(-0.25);
        let speed = sample_speed_fraction(rng) * escape_speed;
        let velocity = random_direction(rng) * (speed * velocity_scale);

        cluster.add_body(mass, Point3::from(position), velocity);
    }
    cluster
}
