//! Physical constants shared by all modules of the crate. SI units unless
//! noted otherwise.

/// Universal gas constant, J/(mol*K)
pub const R: f64 = 8.314;
/// Faraday constant, C/mol
pub const F: f64 = 96485.0;
/// Avogadro constant, 1/mol
pub const N_A: f64 = 6.02214076e23;
/// Standard temperature, K (25 C)
pub const STANDARD_TEMPERATURE: f64 = 298.15;
/// Physiological temperature, K (37 C), default for membrane flux models
pub const BODY_TEMPERATURE: f64 = 310.15;
