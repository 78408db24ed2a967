use approx::assert_relative_eq;

use crate::luminosity::{Luminosity, SOLAR_LUMINOSITY_ERG_S};

#[test]
fn test_luminosity_conversions() {
    let l = Luminosity::from_solar_luminosities(320.0);
    assert_relative_eq!(l.to_erg_per_second(), 320.0 * SOLAR_LUMINOSITY_ERG_S);

    let back = Luminosity::from_erg_per_second(l.to_erg_per_second());
    assert_relative_eq!(back.to_solar_luminosities(), 320.0);

    let doubled = l + l * 1.0;
    assert_relative_eq!(doubled.to_solar_luminosities(), 640.0);
    assert_eq!(Luminosity::zero().to_erg_per_second(), 0.0);
}
