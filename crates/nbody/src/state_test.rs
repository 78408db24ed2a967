use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::body::BodyId;
use crate::forces::G;
use crate::state::ClusterState;

fn make_binary() -> ClusterState {
    let mut cluster = ClusterState::new();
    cluster.add_body(1.0, Point3::new(-50.0, 0.0, 0.0), Vector3::new(0.0, -0.1, 0.0));
    cluster.add_body(1.0, Point3::new(50.0, 0.0, 0.0), Vector3::new(0.0, 0.1, 0.0));
    cluster
}

#[test]
fn test_add_body_assigns_sequential_ids() {
    let mut cluster = ClusterState::new();

    let id1 = cluster.add_body(0.3, Point3::origin(), Vector3::zeros());
    let id2 = cluster.add_body(5.0, Point3::new(1000.0, 0.0, 0.0), Vector3::zeros());

    assert_eq!(cluster.body_count(), 2);
    assert_eq!(id1, BodyId(0));
    assert_eq!(id2, BodyId(1));
}

#[test]
fn test_lookup() {
    let cluster = make_binary();

    assert_eq!(cluster.get_body(BodyId(1)).map(|b| b.id), Some(BodyId(1)));
    assert!(cluster.get_body(BodyId(99)).is_none());
}

#[test]
fn test_totals() {
    let cluster = make_binary();

    assert_relative_eq!(cluster.total_mass(), 2.0);
    assert_relative_eq!(cluster.kinetic_energy(), 0.01);
    assert_relative_eq!(cluster.total_momentum().magnitude(), 0.0);
    assert_relative_eq!(cluster.potential_energy(), -G / 100.0);
}

#[test]
fn test_center_of_mass_frame() {
    let mut cluster = ClusterState::new();
    cluster.add_body(3.0, Point3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    cluster.add_body(1.0, Point3::new(-2.0, 4.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

    let com = cluster.center_of_mass();
    assert_relative_eq!(com.x, 7.0);
    assert_relative_eq!(com.y, 1.0);

    cluster.move_to_center();
    assert_relative_eq!(cluster.center_of_mass().coords.magnitude(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(cluster.total_momentum().magnitude(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_virial_radius_of_binary() {
    let cluster = make_binary();

    // W = -G m² / d, R_vir = G M² / 2|W| = (2)² d / 2 = 2 d
    assert_relative_eq!(cluster.virial_radius().unwrap_or(0.0), 200.0, max_relative = 1e-12);

    let mut single = ClusterState::new();
    single.add_body(1.0, Point3::origin(), Vector3::zeros());
    assert!(single.virial_radius().is_none());
}

#[test]
fn test_scale_to_standard() {
    let mut cluster = make_binary();
    cluster.add_body(0.5, Point3::new(0.0, 80.0, 10.0), Vector3::new(0.05, 0.0, 0.02));

    cluster.scale_to_standard(1.0e5, 0.5);

    let w = cluster.potential_energy();
    let t = cluster.kinetic_energy();
    assert_relative_eq!(cluster.virial_radius().unwrap_or(0.0), 1.0e5, max_relative = 1e-10);
    assert_relative_eq!(t / w.abs(), 0.5, max_relative = 1e-10);
    assert_relative_eq!(cluster.total_momentum().magnitude(), 0.0, epsilon = 1e-12);
}
