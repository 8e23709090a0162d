pub fn process_examples(task: usize) {
    match task {
        0 => {
            // FAST PYROLYSIS OF A BIOMASS BATCH
            use crate::Processes::pyrolysis::{pyrolyze, PyrolysisYields};
            let yields = PyrolysisYields::default();
            let products = pyrolyze(250.0, &yields).unwrap();
            println!(
                "250 kg of biomass -> {:?} kg oil, {:?} kg gas, {:?} kg char",
                products.oil_mass, products.gas_mass, products.char_mass
            );
            // slow pyrolysis shifts the split towards char
            let slow = PyrolysisYields {
                oil_yield: 0.3,
                gas_yield: 0.35,
                char_yield: 0.35,
            };
            let products = pyrolyze(250.0, &slow).unwrap();
            println!(
                "slow pyrolysis -> {:?} kg oil, {:?} kg gas, {:?} kg char",
                products.oil_mass, products.gas_mass, products.char_mass
            );
        }
        1 => {
            // REVERSE OSMOSIS OF A SEAWATER TANK
            use crate::Processes::reverse_osmosis::{
                desalinate, freshwater_percentage, generate_seawater,
            };
            let mut rng = rand::rng();
            let tank = generate_seawater(950, 50, &mut rng);
            println!("tank holds {} molecules", tank.len());
            let (freshwater, brine) = desalinate(&tank);
            println!(
                "membrane passed {} water molecules and rejected {} salt",
                freshwater.len(),
                brine.len()
            );
            println!(
                "freshwater purity: {:?} %",
                freshwater_percentage(&freshwater)
            );
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
