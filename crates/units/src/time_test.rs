use approx::assert_relative_eq;

use crate::time::{SECONDS_PER_YEAR, Time};

#[test]
fn test_time_conversions() {
    let one_year = Time::from_years(1.0);
    assert_relative_eq!(one_year.to_seconds(), SECONDS_PER_YEAR);
    assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_years(), 1.0);

    let onset = Time::from_myr(0.6);
    assert_relative_eq!(onset.to_years(), 600_000.0);
    assert_relative_eq!(onset.to_myr(), 0.6);
}

#[test]
fn test_time_arithmetic() {
    let mut t = Time::zero();
    let dt = Time::from_years(2000.0);
    t += dt;
    t += dt;

    assert_relative_eq!(t.to_years(), 4000.0);
    assert_relative_eq!((t - dt).to_years(), 2000.0);
    assert_relative_eq!((dt / 2.0).to_years(), 1000.0);
    assert_relative_eq!(t / dt, 2.0);
    assert_eq!(t.min(dt), dt);
    assert_eq!(t.max(dt), t);
}
