use crate::body::{Body, BodyId};
use crate::forces::G;
use nalgebra::{Point3, Vector3};

/// Complete state of a star cluster at a given time
#[derive(Debug, Clone, Default)]
pub struct ClusterState {
    /// Current simulation time in years
    pub time: f64,
    /// Cluster members
    pub bodies: Vec<Body>,
    /// Next available body ID
    next_id: u64,
}

impl ClusterState {
    /// Creates an empty cluster at t = 0
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::ClusterState;
    ///
    /// let cluster = ClusterState::new();
    /// assert_eq!(cluster.body_count(), 0);
    /// assert_eq!(cluster.time, 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new body to the cluster and returns its ID
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in solar masses
    /// * `position` - Position in AU
    /// * `velocity` - Velocity in AU/year
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::ClusterState;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let mut cluster = ClusterState::new();
    /// let id = cluster.add_body(5.0, Point3::origin(), Vector3::zeros());
    ///
    /// assert_eq!(cluster.body_count(), 1);
    /// assert_eq!(cluster.get_body(id).map(|b| b.mass), Some(5.0));
    /// ```
    pub fn add_body(&mut self, mass: f64, position: Point3<f64>, velocity: Vector3<f64>) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            mass,
            position,
            velocity,
        });
        id
    }

    /// Gets a reference to a body by ID
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Returns the number of bodies in the cluster
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the total mass of all bodies in solar masses
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total kinetic energy in M☉ AU² year⁻²
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Returns the total momentum of all bodies
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Mass-weighted mean position (origin for an empty cluster)
    pub fn center_of_mass(&self) -> Point3<f64> {
        let total = self.total_mass();
        if total <= 0.0 {
            return Point3::origin();
        }
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector3::zeros(), |acc, r| acc + r);
        Point3::from(weighted / total)
    }

    /// Mass-weighted mean velocity (zero for an empty cluster)
    pub fn center_of_mass_velocity(&self) -> Vector3<f64> {
        let total = self.total_mass();
        if total <= 0.0 {
            return Vector3::zeros();
        }
        self.total_momentum() / total
    }

    /// Shift positions and velocities into the center-of-mass frame
    pub fn move_to_center(&mut self) {
        let com = self.center_of_mass().coords;
        let com_velocity = self.center_of_mass_velocity();
        for body in &mut self.bodies {
            body.position -= com;
            body.velocity -= com_velocity;
        }
    }

    /// Unsoftened gravitational potential energy, each pair counted once
    pub fn potential_energy(&self) -> f64 {
        self.bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                self.bodies[i + 1..].iter().map(move |b| {
                    let r = (a.position - b.position).magnitude();
                    -G * a.mass * b.mass / r
                })
            })
            .sum()
    }

    /// Virial radius `R_vir = G M² / (2 |W|)` in AU
    ///
    /// Returns `None` when the potential energy vanishes (fewer than two bodies).
    pub fn virial_radius(&self) -> Option<f64> {
        let w = self.potential_energy();
        if w >= 0.0 {
            return None;
        }
        let m = self.total_mass();
        Some(G * m * m / (2.0 * w.abs()))
    }

    /// Rescale to a given virial radius and virial ratio `Q = T / |W|`
    ///
    /// The cluster is moved to its center-of-mass frame first. Positions are
    /// scaled so that the unsoftened potential energy matches `virial_radius`,
    /// then velocities so that the kinetic energy equals `Q |W|`. A cluster with
    /// fewer than two bodies is only recentred.
    pub fn scale_to_standard(&mut self, virial_radius: f64, virial_ratio: f64) {
        self.move_to_center();

        let Some(current_radius) = self.virial_radius() else {
            return;
        };
        let position_scale = virial_radius / current_radius;
        for body in &mut self.bodies {
            body.position.coords *= position_scale;
        }

        let target_kinetic = virial_ratio * self.potential_energy().abs();
        let kinetic = self.kinetic_energy();
        if kinetic > 0.0 {
            let velocity_scale = (target_kinetic / kinetic).sqrt();
            for body in &mut self.bodies {
                body.velocity *= velocity_scale;
            }
        }
    }
}
