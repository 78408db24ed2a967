use thiserror::Error;

/// Invalid disk construction or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiskError {
    #[error("disk mass must be positive")]
    NonPositiveMass,

    #[error("disk radius must be positive")]
    NonPositiveRadius,

    /// The profile places the last of the mass at infinity.
    #[error("enclosed mass must be below the total disk mass")]
    EnclosedMassNotBelowTotal,

    #[error("enclosed mass must not be negative")]
    NegativeEnclosedMass,
}
