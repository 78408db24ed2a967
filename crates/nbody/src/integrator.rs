//! Time integration for N-body systems
//!
//! The symplectic leapfrog advances the cluster with a shared timestep. Cluster
//! runs call [`Leapfrog::evolve_to`], which picks substeps from the current
//! accelerations and lands exactly on the requested time.

use log::trace;

use crate::forces::ForceModel;
use crate::state::ClusterState;
use nalgebra::Vector3;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current cluster state (modified in place)
    /// * `dt` - Timestep in years
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut ClusterState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    ///
    /// Returns the final time after integration
    fn integrate(
        &self,
        state: &mut ClusterState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }
}

/// Symplectic leapfrog integrator (2nd order, kick-drift-kick)
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) * dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) * dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) * dt/2
///
/// # Examples
///
/// ```
/// use nbody::integrator::{Integrator, Leapfrog};
/// use nbody::forces::DirectGravity;
/// use nbody::state::ClusterState;
/// use nalgebra::{Point3, Vector3};
///
/// let mut cluster = ClusterState::new();
/// cluster.add_body(1.0, Point3::new(-50.0, 0.0, 0.0), Vector3::new(0.0, -0.3, 0.0));
/// cluster.add_body(1.0, Point3::new(50.0, 0.0, 0.0), Vector3::new(0.0, 0.3, 0.0));
///
/// let integrator = Leapfrog::new(0.01);
/// let force = DirectGravity::new();
///
/// integrator.step(&mut cluster, 1.0, &force);
/// assert_eq!(cluster.time, 1.0);
/// ```
pub struct Leapfrog {
    /// Accuracy parameter η of the substep criterion `dt = η sqrt(ε / |a|max)`
    pub timestep_parameter: f64,
    /// Length scale ε of the criterion in AU (the gravitational softening)
    pub length_scale: f64,
}

impl Leapfrog {
    /// Creates a leapfrog integrator with the given accuracy parameter and a 1 AU length scale
    pub fn new(timestep_parameter: f64) -> Self {
        Self {
            timestep_parameter,
            length_scale: 1.0,
        }
    }

    /// Sets the criterion length scale (normally the gravitational softening)
    pub fn with_length_scale(mut self, length_scale: f64) -> Self {
        self.length_scale = length_scale;
        self
    }

    /// Advance until `state.time` reaches `t_end` (years)
    ///
    /// Substeps follow `dt = η sqrt(ε / |a|max)` and the last one is shortened
    /// to land on `t_end`. Returns the number of substeps taken. Does nothing if
    /// `t_end` is not in the future.
    pub fn evolve_to(&self, state: &mut ClusterState, t_end: f64, force: &dyn ForceModel) -> usize {
        let mut substeps = 0;
        while state.time < t_end {
            let remaining = t_end - state.time;
            let dt = self.substep(state, force).min(remaining);
            if dt <= 0.0 {
                break;
            }
            self.step(state, dt, force);
            substeps += 1;
            // Guard against rounding leaving a sliver below t_end
            if t_end - state.time < 1e-12 * t_end.abs().max(1.0) {
                state.time = t_end;
            }
        }
        trace!("leapfrog reached t = {t_end} yr in {substeps} substeps");
        substeps
    }

    /// Suggested substep from the current accelerations
    pub fn substep(&self, state: &ClusterState, force: &dyn ForceModel) -> f64 {
        let a_max = force
            .accelerations(state)
            .iter()
            .map(|a| a.magnitude())
            .fold(0.0, f64::max);

        if a_max <= 0.0 {
            return f64::INFINITY;
        }
        self.timestep_parameter * (self.length_scale / a_max).sqrt()
    }

    fn kick(&self, state: &mut ClusterState, dt_half: f64, force: &dyn ForceModel) {
        let accelerations: Vec<Vector3<f64>> = force.accelerations(state);

        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt_half;
            });
    }

    fn drift(&self, state: &mut ClusterState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });
    }
}

impl Default for Leapfrog {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl Integrator for Leapfrog {
    fn step(&self, state: &mut ClusterState, dt: f64, force: &dyn ForceModel) {
        self.kick(state, dt / 2.0, force);
        self.drift(state, dt);
        // Time-dependent forces see the end-of-step time on the closing kick
        state.time += dt;
        self.kick(state, dt / 2.0, force);
    }
}
