//! # Spectrum Analysis
//!
//! ## Aim
//! Turns a sampled spectrum back into a list of assigned peaks: local maxima
//! are detected, thinned so that only the tallest peak survives within a
//! minimal distance window, measured at half maximum and matched against the
//! reference band tables of [`super::spectral_data`].
//!
//! ## Key Methods
//! - [`find_peaks`]: detection with a height threshold and a distance window
//! - [`peak_width_at_half_max`]: sample-count width of one detected peak
//! - [`analyze_ir_spectrum`], [`analyze_uv_vis_spectrum`],
//!   [`analyze_nmr_spectrum`]: full pipelines producing [`SpectralPeak`]s
//! - [`pretty_print_peaks`]: terminal table of the findings

use prettytable::{Cell, Row, Table};

use super::spectral_data::{
    IR_FUNCTIONAL_GROUPS, NMR_SHIFTS, SpectralPeak, UV_CHROMOPHORES,
};

/// minimal height a detected peak must reach
pub const PEAK_HEIGHT_THRESHOLD: f64 = 0.1;
/// minimal distance between neighbouring peaks, samples
pub const PEAK_DISTANCE: usize = 50;

/// Indices of local maxima at least `height` tall, thinned so no two kept
/// peaks are closer than `distance` samples. When two peaks crowd each
/// other, the taller one wins. Indices come back in ascending order.
pub fn find_peaks(spectrum: &[f64], height: f64, distance: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = Vec::new();
    for i in 1..spectrum.len().saturating_sub(1) {
        if spectrum[i] > spectrum[i - 1] && spectrum[i] > spectrum[i + 1] && spectrum[i] >= height
        {
            candidates.push(i);
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        spectrum[candidates[b]]
            .partial_cmp(&spectrum[candidates[a]])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut keep = vec![true; candidates.len()];
    for &i in &order {
        if !keep[i] {
            continue;
        }
        for j in 0..candidates.len() {
            if j != i && keep[j] && candidates[j].abs_diff(candidates[i]) < distance {
                keep[j] = false;
            }
        }
    }

    let mut peaks: Vec<usize> = candidates
        .into_iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(idx, _)| idx)
        .collect();
    peaks.sort_unstable();
    peaks
}

/// Width of the peak at `peak_idx` at half its height, counted in samples.
/// The walk stops at the first sample at or below half maximum on each side,
/// or at the spectrum edge. `peak_idx` must index into `spectrum`.
pub fn peak_width_at_half_max(spectrum: &[f64], peak_idx: usize) -> f64 {
    let half_max = spectrum[peak_idx] / 2.0;
    let mut left = peak_idx;
    let mut right = peak_idx;
    while left > 0 && spectrum[left] > half_max {
        left -= 1;
    }
    while right < spectrum.len() - 1 && spectrum[right] > half_max {
        right += 1;
    }
    (right - left) as f64
}

fn assign(table: &[(&str, (f64, f64))], position: f64) -> String {
    for (band, (low, high)) in table {
        if *low <= position && position <= *high {
            return band.to_string();
        }
    }
    "Unknown".to_string()
}

fn analyze(grid: &[f64], spectrum: &[f64], table: &[(&str, (f64, f64))]) -> Vec<SpectralPeak> {
    find_peaks(spectrum, PEAK_HEIGHT_THRESHOLD, PEAK_DISTANCE)
        .into_iter()
        .map(|idx| SpectralPeak {
            position: grid[idx],
            intensity: spectrum[idx],
            assignment: assign(table, grid[idx]),
            width: peak_width_at_half_max(spectrum, idx),
        })
        .collect()
}

/// Detect and assign the functional group bands of an IR spectrum
pub fn analyze_ir_spectrum(wavenumbers: &[f64], spectrum: &[f64]) -> Vec<SpectralPeak> {
    analyze(wavenumbers, spectrum, IR_FUNCTIONAL_GROUPS)
}

/// Detect and assign the chromophore bands of a UV-Vis spectrum
pub fn analyze_uv_vis_spectrum(wavelengths: &[f64], spectrum: &[f64]) -> Vec<SpectralPeak> {
    analyze(wavelengths, spectrum, UV_CHROMOPHORES)
}

/// Detect and assign the proton environments of an NMR spectrum
pub fn analyze_nmr_spectrum(chemical_shifts: &[f64], spectrum: &[f64]) -> Vec<SpectralPeak> {
    analyze(chemical_shifts, spectrum, NMR_SHIFTS)
}

/// Print the detected peaks as a table to stdout
pub fn pretty_print_peaks(peaks: &[SpectralPeak]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("position"),
        Cell::new("intensity"),
        Cell::new("assignment"),
        Cell::new("width, samples"),
    ]));
    for peak in peaks {
        table.add_row(Row::new(vec![
            Cell::new(&format!("{:.2}", peak.position)),
            Cell::new(&format!("{:.3}", peak.intensity)),
            Cell::new(&peak.assignment),
            Cell::new(&format!("{:.0}", peak.width)),
        ]));
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Spectroscopy::synthesis::{
        PeakShape, generate_ir_spectrum, generate_nmr_spectrum, generate_uv_vis_spectrum,
        peak_profile,
    };
    use crate::Utils::grid::linspace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_find_peaks_keeps_separated_maxima() {
        let spectrum = [0.0, 1.0, 0.0, 2.0, 0.0];
        assert_eq!(find_peaks(&spectrum, 0.1, 1), vec![1, 3]);
    }

    #[test]
    fn test_find_peaks_distance_thinning() {
        // the taller neighbour shadows the smaller one
        let spectrum = [0.0, 1.0, 0.0, 2.0, 0.0];
        assert_eq!(find_peaks(&spectrum, 0.1, 3), vec![3]);
    }

    #[test]
    fn test_find_peaks_height_threshold() {
        let spectrum = [0.0, 0.05, 0.0, 0.5, 0.0];
        assert_eq!(find_peaks(&spectrum, 0.1, 1), vec![3]);
    }

    #[test]
    fn test_width_at_half_max() {
        let spectrum = [0.0, 1.0, 2.0, 4.0, 2.0, 1.0, 0.0];
        assert_eq!(peak_width_at_half_max(&spectrum, 3), 2.0);
    }

    #[test]
    fn test_ir_roundtrip() {
        let mut rng = StdRng::seed_from_u64(5);
        let (grid, spectrum) =
            generate_ir_spectrum(&["O-H stretch", "C=O stretch"], Some(0.0), &mut rng).unwrap();
        let peaks = analyze_ir_spectrum(&grid, &spectrum);
        assert_eq!(peaks.len(), 2);
        // ascending position order: C=O at 1725, O-H at 3400
        assert_eq!(peaks[0].assignment, "C=O stretch");
        assert!((peaks[0].position - 1725.0).abs() < 2.0);
        assert_eq!(peaks[1].assignment, "O-H stretch");
        assert!((peaks[1].position - 3400.0).abs() < 2.0);
        for peak in &peaks {
            assert!(peak.intensity > 0.99);
            assert!(peak.width > 0.0);
        }
        pretty_print_peaks(&peaks);
    }

    #[test]
    fn test_nmr_roundtrip() {
        let mut rng = StdRng::seed_from_u64(5);
        let (grid, spectrum) =
            generate_nmr_spectrum(&["CH3", "Aromatic", "OH"], Some(0.0), &mut rng).unwrap();
        let peaks = analyze_nmr_spectrum(&grid, &spectrum);
        let assignments: Vec<&str> = peaks.iter().map(|p| p.assignment.as_str()).collect();
        assert_eq!(assignments, vec!["CH3", "OH", "Aromatic"]);
    }

    #[test]
    fn test_uv_roundtrip() {
        let mut rng = StdRng::seed_from_u64(5);
        let (grid, spectrum) =
            generate_uv_vis_spectrum(&["C=C", "C=O"], Some(0.0), &mut rng).unwrap();
        let peaks = analyze_uv_vis_spectrum(&grid, &spectrum);
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].assignment, "C=C");
        assert_eq!(peaks[1].assignment, "C=O");
    }

    #[test]
    fn test_peak_outside_all_bands_is_unknown() {
        let grid = linspace(500.0, 4000.0, 3500);
        let spectrum = peak_profile(&grid, 2500.0, 30.0, PeakShape::Gaussian);
        let peaks = analyze_ir_spectrum(&grid, &spectrum);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].assignment, "Unknown");
    }

    #[test]
    fn test_ir_width_matches_line_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let (grid, spectrum) =
            generate_ir_spectrum(&["O-H stretch"], Some(0.0), &mut rng).unwrap();
        let peaks = analyze_ir_spectrum(&grid, &spectrum);
        assert_eq!(peaks.len(), 1);
        // fwhm of a 200 cm-1 wide Gaussian is ~471 one-wavenumber samples
        assert!(peaks[0].width > 460.0 && peaks[0].width < 480.0);
    }
}
