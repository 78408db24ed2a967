//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the implementations used
//! for embedded star clusters: softened stellar self-gravity and an optional
//! background gas potential.

use crate::state::ClusterState;
use nalgebra::Vector3;

pub mod gas;
pub mod gravity;


pub use gas::{GasExpulsion, PlummerGas};
pub use gravity::DirectGravity;

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
/// G = 4π² ≈ 39.478417
pub const G: f64 = 39.478417;

/// A source of acceleration on bodies in an N-body system
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
/// cluster.add_body(1.0, Point3::new(100.0, 0.0, 0.0), Vector3::zeros());
///
/// let gravity = DirectGravity::new();
/// let accel = gravity.acceleration(0, &cluster);
/// assert!(accel.x > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute acceleration on body at index `idx` given full cluster state
    ///
    /// Returns acceleration in AU/year²
    fn acceleration(&self, idx: usize, state: &ClusterState) -> Vector3<f64>;

    /// Accelerations of every body, in body order
    ///
    /// The default calls `acceleration` per body. Pairwise models override it
    /// to visit each pair once.
    fn accelerations(&self, state: &ClusterState) -> Vec<Vector3<f64>> {
        (0..state.bodies.len())
            .map(|i| self.acceleration(i, state))
            .collect()
    }

    /// Compute potential energy contribution in M☉ AU² year⁻²
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _state: &ClusterState) -> f64 {
        0.0
    }
}

/// Combine multiple force models into a single composite force
///
/// # Examples
///
/// ```
/// use nbody::forces::{CompositeForce, DirectGravity};
///
/// let composite = CompositeForce::new()
///     .with_force(DirectGravity::with_softening(100.0));
/// assert_eq!(composite.len(), 1);
/// ```
#[derive(Default)]
pub struct CompositeForce {
    models: Vec<Box<dyn ForceModel>>,
}

impl CompositeForce {
    /// Creates an empty composite force
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Adds a force model to the composite
    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.models.push(Box::new(force));
        self
    }

    /// Number of combined models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ForceModel for CompositeForce {
    fn acceleration(&self, idx: usize, state: &ClusterState) -> Vector3<f64> {
        self.models
            .iter()
            .map(|f| f.acceleration(idx, state))
            .fold(Vector3::zeros(), |acc, a| acc + a)
    }

    fn accelerations(&self, state: &ClusterState) -> Vec<Vector3<f64>> {
        let mut total = vec![Vector3::zeros(); state.bodies.len()];
        for model in &self.models {
            for (sum, a) in total.iter_mut().zip(model.accelerations(state)) {
                *sum += a;
            }
        }
        total
    }

    fn potential_energy(&self, state: &ClusterState) -> f64 {
        self.models.iter().map(|f| f.potential_energy(state)).sum()
    }
}
