use log::{trace, warn};
use units::{Flux, Length, Mass, MassRate, Time};

use super::grid::{FriedGrid, GridRow, Parameter};
use super::indexer::find_indices;
use crate::error::Result;

/// A disk to look up: host mass, incident field and disk properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FriedQuery {
    pub stellar_mass: Mass,
    pub fuv: Flux,
    pub disk_mass: Mass,
    pub disk_radius: Length,
}

impl FriedQuery {
    /// Coordinates in grid units: M☉, G0, M_Jup, AU.
    pub fn coordinates(&self) -> [f64; 4] {
        [
            self.stellar_mass.to_solar_masses(),
            self.fuv.to_g0(),
            self.disk_mass.to_jupiter_masses(),
            self.disk_radius.to_au(),
        ]
    }
}

/// The eight bracketing rows of a query.
///
/// Ordered as (mass i, mass j, FUV i, FUV j, disk mass i, disk mass j,
/// radius i, radius j). Duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    pub indices: [usize; 8],
    pub rows: [GridRow; 8],
}

impl Candidates {
    /// Index into [`Candidates::rows`] of the row closest to `point`.
    ///
    /// Plain Euclidean distance over the four coordinates. Ties keep the
    /// earlier candidate.
    pub fn nearest(&self, point: &[f64; 4]) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (k, row) in self.rows.iter().enumerate() {
            let d2: f64 = row
                .parameters()
                .iter()
                .zip(point)
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            if d2 < best_distance {
                best = k;
                best_distance = d2;
            }
        }
        best
    }
}

impl FriedGrid {
    /// Bracket every coordinate of `query` against its column.
    pub fn candidates(&self, query: &FriedQuery) -> Result<Candidates> {
        let point = query.coordinates();
        let mut indices = [0; 8];
        for (k, parameter) in Parameter::ALL.into_iter().enumerate() {
            let (i, j) = find_indices(self.column(parameter), point[k])?;
            indices[2 * k] = i;
            indices[2 * k + 1] = j;
        }

        let rows = indices.map(|i| self.rows()[i]);
        Ok(Candidates { indices, rows })
    }

    /// Photoevaporative mass-loss rate for `query`.
    ///
    /// # Example
    /// ```rust
    /// use protodisk::{FriedGrid, FriedQuery};
    /// use units::{Flux, Length, Mass};
    ///
    /// let grid: FriedGrid = "\
    /// M FUV Mdisk Sigma Rdisk Mdot
    /// - - - - - -
    /// 0.3 100 10 1 50 -8
    /// 0.3 1000 10 1 50 -7
    /// "
    /// .parse()
    /// .unwrap();
    ///
    /// let query = FriedQuery {
    ///     stellar_mass: Mass::from_solar_masses(0.3),
    ///     fuv: Flux::from_g0(900.0),
    ///     disk_mass: Mass::from_jupiter_masses(10.0),
    ///     disk_radius: Length::from_au(50.0),
    /// };
    /// let rate = grid.mass_loss_rate(&query).unwrap();
    /// assert!((rate.to_solar_masses_per_year() - 1.0e-7).abs() < 1e-20);
    /// ```
    pub fn mass_loss_rate(&self, query: &FriedQuery) -> Result<MassRate> {
        let candidates = self.candidates(query)?;
        let nearest = candidates.nearest(&self.clamp_infinite(query.coordinates()));
        let row = &candidates.rows[nearest];

        trace!(
            "FRIED lookup {:?} -> row {} (log10 Mdot {})",
            query.coordinates(),
            candidates.indices[nearest],
            row.log10_mass_loss_rate
        );

        Ok(MassRate::from_log10_solar_masses_per_year(row.log10_mass_loss_rate))
    }

    /// Replace infinite coordinates by the matching column bound, so an
    /// unbounded field still measures distance to the brightest rows.
    fn clamp_infinite(&self, mut point: [f64; 4]) -> [f64; 4] {
        for (value, parameter) in point.iter_mut().zip(Parameter::ALL) {
            if value.is_infinite() {
                let column = self.column(parameter);
                let bound = if *value > 0.0 {
                    column.iter().copied().fold(f64::NEG_INFINITY, f64::max)
                } else {
                    column.iter().copied().fold(f64::INFINITY, f64::min)
                };
                warn!("{parameter:?} query is unbounded, clamped to {bound}");
                *value = bound;
            }
        }
        point
    }

    /// Mass removed from the disk over `dt` at the looked-up rate.
    pub fn mass_lost(&self, query: &FriedQuery, dt: Time) -> Result<Mass> {
        Ok(self.mass_loss_rate(query)?.integrate(dt))
    }
}
