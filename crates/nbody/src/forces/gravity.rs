//! Direct N-body gravity (O(N²) implementation)

use crate::forces::{ForceModel, G};
use crate::state::ClusterState;
use nalgebra::Vector3;

/// Direct O(N²) gravitational force computation with Plummer softening
///
/// Every body feels every other body through the softened potential
/// `-G m / sqrt(r² + ε²)`. Cluster runs use ε = 100 AU so that close
/// encounters and binaries do not force tiny timesteps.
///
/// # Examples
///
/// ```
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::ClusterState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut cluster = ClusterState::new();
/// cluster.add_body(1.0, Point3::origin(), Vector3::zeros());
/// cluster.add_body(1.0, Point3::new(1.0, 0.0, 0.0), Vector3::zeros());
///
/// let gravity = DirectGravity::new();
/// let accel = gravity.acceleration(1, &cluster);
///
/// // Should point back toward the first body (negative x direction)
/// assert!(accel.x < 0.0);
/// ```
pub struct DirectGravity {
    /// Softening length (AU)
    pub softening: f64,
}

impl DirectGravity {
    /// Creates a new direct gravity force with no softening
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    /// Creates a new direct gravity force with specified softening length in AU
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::forces::DirectGravity;
    ///
    /// let gravity = DirectGravity::with_softening(100.0);
    /// assert_eq!(gravity.softening, 100.0);
    /// ```
    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }

    fn softening_squared(&self) -> f64 {
        self.softening * self.softening
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &ClusterState) -> Vector3<f64> {
        let body = &state.bodies[idx];
        let eps2 = self.softening_squared();

        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| {
                let dr = other.position - body.position;
                let r2 = dr.magnitude_squared() + eps2;
                let r = r2.sqrt();
                dr * (G * other.mass / (r2 * r))
            })
            .fold(Vector3::zeros(), |acc, a| acc + a)
    }

    fn accelerations(&self, state: &ClusterState) -> Vec<Vector3<f64>> {
        let eps2 = self.softening_squared();
        let bodies = &state.bodies;
        let mut accel = vec![Vector3::zeros(); bodies.len()];

        for i in 0..bodies.len() {
            for j in i + 1..bodies.len() {
                let dr = bodies[j].position - bodies[i].position;
                let r2 = dr.magnitude_squared() + eps2;
                let inv_r3 = G / (r2 * r2.sqrt());
                accel[i] += dr * (bodies[j].mass * inv_r3);
                accel[j] -= dr * (bodies[i].mass * inv_r3);
            }
        }

        accel
    }

    fn potential_energy(&self, state: &ClusterState) -> f64 {
        let eps2 = self.softening_squared();

        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let dr = a.position - b.position;
                    let r = (dr.magnitude_squared() + eps2).sqrt();
                    -G * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
