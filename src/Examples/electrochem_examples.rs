use crate::Electrochemistry::membrane_flux::{
    create_flux_model, create_flux_model_by_name, FluxCalculator, FluxModelType,
    MembraneConditions,
};
use crate::Electrochemistry::nernst::{cell_potential, equilibrium_constant};
use approx::assert_relative_eq;

pub fn electrochem_examples(task: usize) {
    match task {
        0 => {
            // NERNST EQUATION FOR THE DANIELL CELL
            // Zn + Cu2+ -> Zn2+ + Cu, E0 = 1.10 V
            let e = cell_potential(1.10, 298.15, 2, 0.01).unwrap();
            println!("Daniell cell at Q = 0.01: E = {:?} V", e);
            assert_relative_eq!(e, 1.15916, epsilon = 1e-4);
            // at standard conditions the log term vanishes
            let e = cell_potential(1.10, 298.15, 2, 1.0).unwrap();
            println!("Daniell cell at Q = 1: E = {:?} V", e);

            let k = equilibrium_constant(-20_000.0, None).unwrap();
            println!("K for dG = -20 kJ/mol at 298.15 K: {:?}", k);
            let k_hot = equilibrium_constant(-20_000.0, Some(500.0)).unwrap();
            println!("K for dG = -20 kJ/mol at 500 K: {:?}", k_hot);
        }
        1 => {
            // GOLDMAN-HODGKIN-KATZ FLUX OF K+ ACROSS A RESTING MEMBRANE
            let mut conditions = MembraneConditions::new();
            conditions.permeability = Some(1e-7);
            conditions.membrane_potential = Some(-0.07);
            conditions.concentration_out = Some(5.0);
            conditions.concentration_in = Some(140.0);
            let model = create_flux_model(FluxModelType::GHK);
            let flux = model.calculate_flux(&conditions).unwrap();
            println!("{} flux: {:?} mol/(m2 s)", model.model_name(), flux);
            assert_relative_eq!(flux, -3.8062, epsilon = 1e-3);
        }
        2 => {
            // NERNST-PLANCK FLUX IN A DIFFUSION LAYER
            let mut conditions = MembraneConditions::new();
            conditions.diffusion_coefficient = Some(1e-9);
            conditions.concentration = Some(100.0);
            conditions.concentration_gradient = Some(1000.0);
            conditions.potential_gradient = Some(-5.0);
            let model = create_flux_model_by_name("Nernst-Planck");
            let flux = model.calculate_flux(&conditions).unwrap();
            println!("{} flux: {:?} mol/(m2 s)", model.model_name(), flux);
            // with no field and no charge this reduces to Fick's first law
            let mut uncharged = conditions.clone();
            uncharged.valence = 0;
            let fick = model.calculate_flux(&uncharged).unwrap();
            println!("uncharged flux: {:?} mol/(m2 s)", fick);
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
