use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lines at the top of a grid file that carry column labels.
const HEADER_LINES: usize = 2;

/// Columns per row: mass, FUV, disk mass, surface density, disk radius, log10 Ṁ.
const COLUMNS: usize = 6;

/// One precomputed model of the FRIED grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    /// Host stellar mass (M☉)
    pub stellar_mass: f64,
    /// Incident FUV field (G0)
    pub fuv: f64,
    /// Disk mass (M_Jup)
    pub disk_mass: f64,
    /// Surface density at 1 AU (g/cm²), not used for lookups
    pub surface_density: f64,
    /// Disk outer radius (AU)
    pub disk_radius: f64,
    /// log10 of the mass-loss rate (M☉/yr)
    pub log10_mass_loss_rate: f64,
}

impl GridRow {
    /// The four lookup coordinates in [`Parameter`] order.
    pub fn parameters(&self) -> [f64; 4] {
        [self.stellar_mass, self.fuv, self.disk_mass, self.disk_radius]
    }
}

/// Lookup coordinate of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    StellarMass,
    Fuv,
    DiskMass,
    DiskRadius,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::StellarMass,
        Parameter::Fuv,
        Parameter::DiskMass,
        Parameter::DiskRadius,
    ];

    fn index(self) -> usize {
        match self {
            Parameter::StellarMass => 0,
            Parameter::Fuv => 1,
            Parameter::DiskMass => 2,
            Parameter::DiskRadius => 3,
        }
    }
}

/// Immutable table of mass-loss rates. Rows keep file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FriedGrid {
    rows: Vec<GridRow>,
    columns: [Vec<f64>; 4],
}

impl FriedGrid {
    pub fn from_rows(rows: Vec<GridRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }

        let columns = Parameter::ALL.map(|p| rows.iter().map(|r| r.parameters()[p.index()]).collect());
        Ok(Self { rows, columns })
    }

    /// Read a whitespace-delimited grid file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one lookup coordinate, in row order.
    pub fn column(&self, parameter: Parameter) -> &[f64] {
        &self.columns[parameter.index()]
    }
}

impl FromStr for FriedGrid {
    type Err = Error;

    /// The first two lines are headers. Blank lines and `#` comments are
    /// skipped, columns past the sixth are ignored.
    fn from_str(text: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (offset, raw) in text.lines().enumerate().skip(HEADER_LINES) {
            let line = offset + 1;
            let content = raw.split('#').next().unwrap_or_default();
            let fields: Vec<&str> = content.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < COLUMNS {
                return Err(Error::MissingColumns {
                    line,
                    found: fields.len(),
                });
            }

            let mut values = [0.0; COLUMNS];
            for (column, (slot, field)) in values.iter_mut().zip(&fields).enumerate() {
                *slot = field.parse().map_err(|_| Error::Parse {
                    line,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            }

            rows.push(GridRow {
                stellar_mass: values[0],
                fuv: values[1],
                disk_mass: values[2],
                surface_density: values[3],
                disk_radius: values[4],
                log10_mass_loss_rate: values[5],
            });
        }

        Self::from_rows(rows)
    }
}
