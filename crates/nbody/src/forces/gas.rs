//! Background gas potential for embedded clusters.
//!
//! Young clusters are still embedded in the molecular gas they formed from.
//! The gas is modelled as a static Plummer sphere centred on the origin whose
//! mass can decay once gas expulsion starts.

use serde::{Deserialize, Serialize};

use crate::forces::{ForceModel, G};
use crate::state::ClusterState;
use nalgebra::Vector3;

/// Gas expulsion history
///
/// The gas mass is constant until `onset`, then halves every `half_life`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasExpulsion {
    /// Time at which the gas starts dispersing (years)
    pub onset: f64,
    /// Time for half of the remaining gas to be expelled (years)
    pub half_life: f64,
}

impl GasExpulsion {
    /// Fraction of the initial gas mass still present at time `t` (years)
    pub fn remaining_fraction(&self, t: f64) -> f64 {
        if t <= self.onset {
            return 1.0;
        }
        if self.half_life <= 0.0 {
            return 0.0;
        }
        0.5f64.powf((t - self.onset) / self.half_life)
    }
}

/// Plummer-sphere gas potential `Φ(r) = -G M_gas(t) / sqrt(r² + a²)`
///
/// # Examples
///
/// ```
/// use nbody::forces::{GasExpulsion, PlummerGas};
///
/// let gas = PlummerGas::new(2400.0, 1.0e5).with_expulsion(GasExpulsion {
///     onset: 6.0e5,
///     half_life: 1.0e5,
/// });
///
/// assert_eq!(gas.mass_at(0.0), 2400.0);
/// assert!((gas.mass_at(7.0e5) - 1200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlummerGas {
    /// Initial gas mass (M☉)
    pub initial_mass: f64,
    /// Plummer scale radius (AU)
    pub plummer_radius: f64,
    /// Optional expulsion history; `None` keeps the gas forever
    pub expulsion: Option<GasExpulsion>,
}

impl PlummerGas {
    /// Creates a static gas sphere
    pub fn new(initial_mass: f64, plummer_radius: f64) -> Self {
        Self {
            initial_mass,
            plummer_radius,
            expulsion: None,
        }
    }

    /// Enables gas expulsion
    pub fn with_expulsion(mut self, expulsion: GasExpulsion) -> Self {
        self.expulsion = Some(expulsion);
        self
    }

    /// Gas mass at time `t` (years)
    pub fn mass_at(&self, t: f64) -> f64 {
        match self.expulsion {
            Some(expulsion) => self.initial_mass * expulsion.remaining_fraction(t),
            None => self.initial_mass,
        }
    }
}

impl ForceModel for PlummerGas {
    fn acceleration(&self, idx: usize, state: &ClusterState) -> Vector3<f64> {
        let r = state.bodies[idx].position.coords;
        let a2 = self.plummer_radius * self.plummer_radius;
        let d2 = r.magnitude_squared() + a2;
        -r * (G * self.mass_at(state.time) / (d2 * d2.sqrt()))
    }

    fn potential_energy(&self, state: &ClusterState) -> f64 {
        let a2 = self.plummer_radius * self.plummer_radius;
        let gas_mass = self.mass_at(state.time);
        state
            .bodies
            .iter()
            .map(|b| -G * gas_mass * b.mass / (b.position.coords.magnitude_squared() + a2).sqrt())
            .sum()
    }
}
