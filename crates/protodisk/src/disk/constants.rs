/// Gravitational constant (cm³/(g·s²))
pub const G: f64 = 6.674e-8;

/// Molar gas constant (erg/(mol·K))
pub const R_GAS: f64 = 8.314462618e7;
