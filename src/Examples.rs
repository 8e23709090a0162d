/// Worked demonstrations of the stoichiometry module: formula parsing,
/// molar masses, equation balancing and full reaction reports.
pub mod stoichiometry_examples;

/// Nernst potentials, equilibrium constants and membrane flux models.
pub mod electrochem_examples;

/// Synthetic IR, UV-Vis and NMR spectra with peak detection and assignment,
/// plus a chromatogram and a stick mass spectrum.
pub mod spectroscopy_examples;

/// Pyrolysis mass balances and a molecular reverse osmosis toy.
pub mod process_examples;
