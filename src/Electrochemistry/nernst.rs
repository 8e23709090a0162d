//! Electrode potentials away from standard conditions and the equilibrium
//! constants they correspond to. Both corrections share the same RT scale,
//! so the module also owns [`ElectrochemError`], the error type of the whole
//! electrochemistry family.

use crate::constants::{F, R, STANDARD_TEMPERATURE};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElectrochemError {
    #[error("temperature must be positive, got {0} K")]
    NonPositiveTemperature(f64),
    #[error("electron count must be nonzero")]
    ZeroElectronCount,
    #[error("reaction quotient must be positive, got {0}")]
    NonPositiveQuotient(f64),
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}

/// Cell potential by the Nernst equation, E = E0 - RT/(nF)*ln(Q), in volts.
///
/// `electrons` is the number of electrons transferred, `quotient` the
/// reaction quotient Q. At Q = 1 the standard potential is returned as is.
pub fn cell_potential(
    standard_potential: f64,
    temperature: f64,
    electrons: u32,
    quotient: f64,
) -> Result<f64, ElectrochemError> {
    if temperature <= 0.0 {
        return Err(ElectrochemError::NonPositiveTemperature(temperature));
    }
    if electrons == 0 {
        return Err(ElectrochemError::ZeroElectronCount);
    }
    if quotient <= 0.0 {
        return Err(ElectrochemError::NonPositiveQuotient(quotient));
    }
    Ok(standard_potential - R * temperature / (electrons as f64 * F) * quotient.ln())
}

/// Equilibrium constant from the Gibbs energy change, K = exp(-dG/(RT)).
///
/// `delta_g` is in J/mol; `temperature` defaults to 298.15 K when `None`.
pub fn equilibrium_constant(
    delta_g: f64,
    temperature: Option<f64>,
) -> Result<f64, ElectrochemError> {
    let temperature = temperature.unwrap_or(STANDARD_TEMPERATURE);
    if temperature <= 0.0 {
        return Err(ElectrochemError::NonPositiveTemperature(temperature));
    }
    Ok((-delta_g / (R * temperature)).exp())
}
