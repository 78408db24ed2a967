//! The FRIED grid of externally driven photoevaporation rates
//! (Haworth et al. 2018) and the nearest-of-eight lookup used on it.
//!
//! Each of the four query parameters is bracketed independently against its
//! column. The eight bracketing rows form a small candidate set and the
//! candidate closest to the query in raw parameter space supplies the rate.
//! No interpolation takes place between candidates.

mod estimator;
mod grid;
mod indexer;


pub use estimator::{Candidates, FriedQuery};
pub use grid::{FriedGrid, GridRow, Parameter};
pub use indexer::find_indices;
