/// Nernst equation for cell potentials away from standard conditions and the
/// equilibrium constant of a reaction from its Gibbs energy change
///
/// # Examples
/// ```
/// use StoiChem::Electrochemistry::nernst::cell_potential;
/// // Zn/Cu cell, two electrons, Q = 0.01
/// let e = cell_potential(1.10, 298.15, 2, 0.01).unwrap();
/// println!("cell potential: {} V", e);
/// assert!(e > 1.10);
/// ```
pub mod nernst;
/// Ion flux across a membrane: Goldman-Hodgkin-Katz and Nernst-Planck models
/// behind a common dispatch trait, selected at runtime through a factory
///
/// # Examples
/// ```
/// use StoiChem::Electrochemistry::membrane_flux::{
///     FluxCalculator, FluxModelType, MembraneConditions, create_flux_model,
/// };
/// let mut conditions = MembraneConditions::new();
/// conditions.permeability = Some(1e-7);
/// conditions.membrane_potential = Some(-0.07);
/// conditions.concentration_out = Some(5.0);
/// conditions.concentration_in = Some(140.0);
/// let model = create_flux_model(FluxModelType::GHK);
/// let flux = model.calculate_flux(&conditions).unwrap();
/// println!("{}: {}", model.model_name(), flux);
/// ```
pub mod membrane_flux;
