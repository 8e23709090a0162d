/// Lumped-yield biomass pyrolysis with mass conservation checks
///
/// # Examples
/// ```
/// use StoiChem::Processes::pyrolysis::{PyrolysisYields, pyrolyze};
/// let products = pyrolyze(100.0, &PyrolysisYields::default()).unwrap();
/// println!("oil: {} kg, gas: {} kg, char: {} kg",
///     products.oil_mass, products.gas_mass, products.char_mass);
/// ```
pub mod pyrolysis;
/// Molecule-counting reverse osmosis: seawater generation, an ideal membrane
/// pass and the freshwater share of a tank
pub mod reverse_osmosis;
