use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};

#[test]
fn test_new_body() {
    let body = Body::new(BodyId(7), 0.3, [1.0, 2.0, 3.0], [0.1, 0.0, -0.1]);

    assert_eq!(body.id, BodyId(7));
    assert_eq!(body.mass, 0.3);
    assert_eq!(body.position, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(body.velocity, Vector3::new(0.1, 0.0, -0.1));
}

#[test]
fn test_momentum() {
    let body = Body::new(BodyId(0), 2.0, [1.0, 0.0, 0.0], [3.0, 4.0, 0.0]);
    assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
}

#[test]
fn test_kinetic_energy() {
    let body = Body::new(BodyId(0), 2.0, [0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);

    // KE = 0.5 * m * v² = 0.5 * 2 * 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
    let a = Body::new(BodyId(0), 1.0, [0.0, 0.0, 0.0], [0.0; 3]);
    let b = Body::new(BodyId(1), 1.0, [1000.0, 0.0, 0.0], [0.0; 3]);

    assert_eq!(a.distance_to(&b), 1000.0);
    assert_eq!(b.distance_to(&a), 1000.0);
}
