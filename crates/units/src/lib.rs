//! Typed astrophysical quantities.
//!
//! Each quantity wraps an `f64` in a fixed base unit (AU, M☉, years, L☉, ...)
//! and converts to CGS at the boundaries where physics formulas need it.

pub mod flux;
pub mod length;
pub mod luminosity;
pub mod mass;
pub mod mass_rate;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod luminosity_test;
#[cfg(test)]
mod time_test;

pub use flux::{Flux, G0_ERG_PER_S_CM2};
pub use length::Length;
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_ERG_S};
pub use mass::{JUPITER_MASS_G, Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use temperature::Temperature;
pub use time::Time;
