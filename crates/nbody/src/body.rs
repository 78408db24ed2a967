use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,              // Solar masses
    pub position: Point3<f64>,  // AU (cluster frame)
    pub velocity: Vector3<f64>, // AU/year
}

impl Body {
    /// Creates a body with mass in solar masses, position in AU and velocity in AU/year
    pub fn new(id: BodyId, mass: f64, position: [f64; 3], velocity: [f64; 3]) -> Self {
        Body {
            id,
            mass,
            position: Point3::new(position[0], position[1], position[2]),
            velocity: Vector3::new(velocity[0], velocity[1], velocity[2]),
        }
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }
}
