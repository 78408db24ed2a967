use std::path::PathBuf;

use crate::config::ClusterConfig;
use crate::error::Error;

#[test]
fn defaults_match_reference_run() {
    let config = ClusterConfig::default();

    assert_eq!(config.number_of_stars, 2000);
    assert_eq!(config.virial_radius_pc, 0.5);
    assert_eq!(config.virial_ratio, 0.5);
    assert_eq!(config.max_stellar_mass, 100.0);
    assert_eq!(config.disks.bright_star_threshold, 1.9);
    assert_eq!(config.disks.mass_fraction, 0.1);
    assert_eq!(config.disks.radius_coefficient, 100.0);
    assert_eq!(config.gravity.softening_au, 100.0);
    assert_eq!(config.gravity.timestep_parameter, 0.01);
    assert_eq!(config.stellar.metallicity, 0.02);
    assert_eq!(config.gas.mass_ratio, 2.0);
    assert_eq!(config.time.step_yr, 2000.0);
    assert_eq!(config.time.end_myr, 2.0);
    assert_eq!(config.run_directory(), PathBuf::from("./run_0"));
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{
        "numberOfStars": 300,
        "disks": { "alpha": 0.001 },
        "time": { "endMyr": 0.1 }
    }"#;
    let config: ClusterConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.number_of_stars, 300);
    assert_eq!(config.disks.alpha, 0.001);
    assert_eq!(config.disks.radius_coefficient, 100.0);
    assert_eq!(config.time.end_myr, 0.1);
    assert_eq!(config.time.step_yr, 2000.0);
}

#[test]
fn loads_from_json_file() {
    let path = std::env::temp_dir().join(format!("cluster-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "virialRatio": 0.3, "output": { "runNumber": 9 } }"#).unwrap();

    let config = ClusterConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.virial_ratio, 0.3);
    assert_eq!(config.output.run_number, 9);
}

#[test]
fn malformed_json_is_an_error() {
    let path = std::env::temp_dir().join(format!("cluster-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();

    let result = ClusterConfig::from_json_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn validate_rejects_bad_values() {
    let cases: Vec<fn(&mut ClusterConfig)> = vec![
        |c| c.number_of_stars = 1,
        |c| c.virial_radius_pc = 0.0,
        |c| c.virial_ratio = -0.5,
        |c| c.disks.alpha = 0.0,
        |c| c.disks.mass_fraction = f64::NAN,
        |c| c.stellar.metallicity = 1.5,
        |c| c.time.step_yr = 0.0,
        |c| c.time.end_myr = 0.0,
        |c| {
            c.gas.presence = true;
            c.gas.expulsion = true;
            c.gas.expulsion_timescale_myr = 0.0;
        },
    ];

    for (i, mutate) in cases.into_iter().enumerate() {
        let mut config = ClusterConfig::default();
        mutate(&mut config);
        assert!(
            matches!(config.validate(), Err(Error::Config(_))),
            "case {i} should be rejected"
        );
    }
}

#[test]
fn run_checks_ignore_cluster_shape() {
    let mut config = ClusterConfig::default();
    config.number_of_stars = 1;
    config.virial_radius_pc = 0.0;

    assert!(matches!(config.validate_cluster(), Err(Error::Config(_))));
    assert!(config.validate_run().is_ok());

    config.time.step_yr = 0.0;
    assert!(matches!(config.validate_run(), Err(Error::Config(_))));
}
