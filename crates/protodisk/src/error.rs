use thiserror::Error;

use crate::disk::DiskError;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or querying the FRIED grid.
#[derive(Debug, Error)]
pub enum Error {
    /// The grid file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A grid cell is not a number. Line and column are 1-based.
    #[error("line {line}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    /// A grid row is shorter than the six expected columns.
    #[error("line {line}: expected 6 columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    /// The grid (or a column handed to the indexer) has no rows.
    #[error("grid has no rows")]
    EmptyGrid,

    #[error(transparent)]
    Disk(#[from] DiskError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_location() {
        let e = Error::Parse {
            line: 7,
            column: 3,
            value: "abc".to_string(),
        };
        let msg = format!("{e}");
        assert!(msg.contains("line 7"));
        assert!(msg.contains("column 3"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn disk_errors_convert() {
        let e: Error = DiskError::NonPositiveMass.into();
        assert!(matches!(e, Error::Disk(DiskError::NonPositiveMass)));
    }
}
