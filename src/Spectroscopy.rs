/// Reference band tables (IR functional groups, UV-Vis chromophores, NMR
/// chemical shifts) and the [`spectral_data::SpectralPeak`] record
pub mod spectral_data;
/// Synthetic spectrum generation: Gaussian bands from the reference tables
/// plus seeded measurement noise
///
/// # Examples
/// ```
/// use StoiChem::Spectroscopy::synthesis::generate_ir_spectrum;
/// let mut rng = rand::rng();
/// let (wavenumbers, spectrum) =
///     generate_ir_spectrum(&["O-H stretch", "C=O stretch"], None, &mut rng).unwrap();
/// assert_eq!(wavenumbers.len(), spectrum.len());
/// ```
pub mod synthesis;
/// Peak detection, width measurement and band assignment for sampled spectra
///
/// # Examples
/// ```
/// use StoiChem::Spectroscopy::analysis::{analyze_ir_spectrum, pretty_print_peaks};
/// use StoiChem::Spectroscopy::synthesis::generate_ir_spectrum;
/// let mut rng = rand::rng();
/// let (wavenumbers, spectrum) =
///     generate_ir_spectrum(&["C=O stretch"], Some(0.0), &mut rng).unwrap();
/// let peaks = analyze_ir_spectrum(&wavenumbers, &spectrum);
/// pretty_print_peaks(&peaks);
/// ```
pub mod analysis;
/// Simulated chromatogram and stick mass spectrum reference signals
pub mod chromatogram;
