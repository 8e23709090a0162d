//! # Membrane Flux Models
//!
//! ## Aim
//! Ion flux across a membrane under both a concentration gradient and an
//! electric field. Two classic electrodiffusion models are provided behind
//! one dispatch enum, so calling code can switch models without generics:
//! the Goldman-Hodgkin-Katz flux equation (constant-field membrane, needs
//! permeability and the two bath concentrations) and the Nernst-Planck flux
//! (local form, needs the diffusion coefficient and the two gradients).
//!
//! ## Main Data Structures and Logic
//! - [`MembraneConditions`] carries every parameter any model may need;
//!   unused fields stay `None`, a model reports the exact field it misses
//! - [`FluxCalculator`] is the dispatch trait, [`FluxModel`] the enum over
//!   the implementations, [`create_flux_model`] the factory
//!
//! ## Usage
//! ```rust, ignore
//! let mut conditions = MembraneConditions::new();
//! conditions.permeability = Some(1e-7);
//! conditions.membrane_potential = Some(-0.07);
//! conditions.concentration_out = Some(5.0);
//! conditions.concentration_in = Some(140.0);
//! let model = create_flux_model(FluxModelType::GHK);
//! let flux = model.calculate_flux(&conditions)?;
//! ```

use crate::constants::{BODY_TEMPERATURE, F, R};
use enum_dispatch::enum_dispatch;

use super::nernst::ElectrochemError;

/// Everything a flux model may ask for. Fields a model does not use are
/// simply ignored, missing required fields are reported by name.
#[derive(Debug, Clone)]
pub struct MembraneConditions {
    /// membrane permeability, m/s
    pub permeability: Option<f64>,
    /// ion charge number z
    pub valence: i32,
    /// transmembrane potential, V
    pub membrane_potential: Option<f64>,
    /// extracellular concentration
    pub concentration_out: Option<f64>,
    /// intracellular concentration
    pub concentration_in: Option<f64>,
    /// diffusion coefficient, m2/s
    pub diffusion_coefficient: Option<f64>,
    /// local concentration
    pub concentration: Option<f64>,
    /// concentration gradient dC/dx
    pub concentration_gradient: Option<f64>,
    /// potential gradient dphi/dx, V/m
    pub potential_gradient: Option<f64>,
    /// temperature, K
    pub temperature: f64,
}

impl MembraneConditions {
    /// Empty conditions for a monovalent cation at body temperature
    pub fn new() -> Self {
        Self {
            permeability: None,
            valence: 1,
            membrane_potential: None,
            concentration_out: None,
            concentration_in: None,
            diffusion_coefficient: None,
            concentration: None,
            concentration_gradient: None,
            potential_gradient: None,
            temperature: BODY_TEMPERATURE,
        }
    }

    fn check_temperature(&self) -> Result<f64, ElectrochemError> {
        if self.temperature <= 0.0 {
            return Err(ElectrochemError::NonPositiveTemperature(self.temperature));
        }
        Ok(self.temperature)
    }
}

fn require(value: Option<f64>, name: &'static str) -> Result<f64, ElectrochemError> {
    value.ok_or(ElectrochemError::MissingParameter(name))
}

#[enum_dispatch]
pub trait FluxCalculator {
    /// Flux through the membrane, positive outward
    fn calculate_flux(&self, conditions: &MembraneConditions) -> Result<f64, ElectrochemError>;
    fn model_name(&self) -> &'static str;
}

/// Goldman-Hodgkin-Katz flux equation:
/// J = P * z^2 F^2 V/(RT) * (C_out - C_in*exp(-zFV/RT)) / (1 - exp(-zFV/RT))
#[derive(Clone, Debug)]
pub struct GoldmanHodgkinKatz;

impl FluxCalculator for GoldmanHodgkinKatz {
    fn calculate_flux(&self, conditions: &MembraneConditions) -> Result<f64, ElectrochemError> {
        let permeability = require(conditions.permeability, "permeability")?;
        let potential = require(conditions.membrane_potential, "membrane_potential")?;
        let c_out = require(conditions.concentration_out, "concentration_out")?;
        let c_in = require(conditions.concentration_in, "concentration_in")?;
        let temperature = conditions.check_temperature()?;
        let z = conditions.valence as f64;

        let u = z * F * potential / (R * temperature);
        // the full expression is 0/0 at zero potential; switch to its limit
        if u.abs() < 1e-12 {
            return Ok(permeability * z * F * (c_out - c_in));
        }
        let prefactor = permeability * z * z * F * F * potential / (R * temperature);
        Ok(prefactor * (c_out - c_in * (-u).exp()) / (1.0 - (-u).exp()))
    }

    fn model_name(&self) -> &'static str {
        "Goldman-Hodgkin-Katz"
    }
}

/// Nernst-Planck flux in its local form:
/// J = -D * (dC/dx + zF/(RT) * C * dphi/dx)
#[derive(Clone, Debug)]
pub struct NernstPlanck;

impl FluxCalculator for NernstPlanck {
    fn calculate_flux(&self, conditions: &MembraneConditions) -> Result<f64, ElectrochemError> {
        let diffusion = require(conditions.diffusion_coefficient, "diffusion_coefficient")?;
        let concentration = require(conditions.concentration, "concentration")?;
        let dc_dx = require(conditions.concentration_gradient, "concentration_gradient")?;
        let dphi_dx = require(conditions.potential_gradient, "potential_gradient")?;
        let temperature = conditions.check_temperature()?;
        let z = conditions.valence as f64;

        Ok(-diffusion * (dc_dx + z * F / (R * temperature) * concentration * dphi_dx))
    }

    fn model_name(&self) -> &'static str {
        "Nernst-Planck"
    }
}

#[derive(Clone, Debug)]
#[enum_dispatch(FluxCalculator)]
pub enum FluxModel {
    GHK(GoldmanHodgkinKatz),
    NernstPlanck(NernstPlanck),
}

pub enum FluxModelType {
    GHK,
    NernstPlanck,
}

pub fn create_flux_model(model_type: FluxModelType) -> FluxModel {
    match model_type {
        FluxModelType::GHK => FluxModel::GHK(GoldmanHodgkinKatz),
        FluxModelType::NernstPlanck => FluxModel::NernstPlanck(NernstPlanck),
    }
}

pub fn create_flux_model_by_name(model_name: &str) -> FluxModel {
    match model_name {
        "GHK" | "Goldman" | "Goldman-Hodgkin-Katz" => FluxModel::GHK(GoldmanHodgkinKatz),
        "NP" | "Nernst-Planck" => FluxModel::NernstPlanck(NernstPlanck),
        _ => panic!("no such flux model!"),
    }
}
