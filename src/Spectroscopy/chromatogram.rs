//! Simulated chromatography output: a three-compound chromatogram over a
//! ten minute run and a small stick mass spectrum. Fixed reference data,
//! useful for driving the peak detection and the plotting examples.

use super::synthesis::{PeakShape, peak_profile};
use crate::Utils::grid::linspace;

/// (retention time in minutes, peak width, intensity) per compound
pub const CHROMATOGRAM_PEAKS: &[(f64, f64, f64)] = &[
    (3.0, 1.5, 100.0),
    (5.0, 0.8, 150.0),
    (7.0, 1.2, 200.0),
];

/// Simulated chromatogram: 1000 samples of summed Gaussian elution peaks
pub fn generate_chromatogram() -> (Vec<f64>, Vec<f64>) {
    let time = linspace(0.0, 10.0, 1000);
    let mut signal = vec![0.0; time.len()];
    for &(retention_time, width, intensity) in CHROMATOGRAM_PEAKS {
        for (value, peak) in signal
            .iter_mut()
            .zip(peak_profile(&time, retention_time, width, PeakShape::Gaussian))
        {
            *value += intensity * peak;
        }
    }
    (time, signal)
}

/// Simulated stick mass spectrum: m/z values and their intensities
pub fn generate_mass_spectrum() -> (Vec<f64>, Vec<f64>) {
    let mass_to_charge = vec![50.0, 75.0, 100.0, 125.0, 150.0];
    let intensities = vec![10.0, 40.0, 80.0, 20.0, 60.0];
    (mass_to_charge, intensities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_nearest(grid: &[f64], x: f64) -> usize {
        let mut best = 0;
        for (i, value) in grid.iter().enumerate() {
            if (value - x).abs() < (grid[best] - x).abs() {
                best = i;
            }
        }
        best
    }

    #[test]
    fn test_chromatogram_grid() {
        let (time, signal) = generate_chromatogram();
        assert_eq!(time.len(), 1000);
        assert_eq!(signal.len(), 1000);
        assert_eq!(time[0], 0.0);
        assert_eq!(time[999], 10.0);
        assert!(signal.iter().all(|&y| y >= 0.0));
    }

    #[test]
    fn test_compound_contributions() {
        let (time, signal) = generate_chromatogram();
        // at each retention time the own peak contributes its full intensity,
        // the neighbours only add on top
        for &(retention_time, _, intensity) in CHROMATOGRAM_PEAKS {
            let idx = index_nearest(&time, retention_time);
            assert!(
                signal[idx] >= intensity,
                "signal {} below intensity {} at t = {}",
                signal[idx],
                intensity,
                retention_time
            );
        }
        // overlapping tails pile up mid-run
        assert!((signal[500] - 241.14).abs() < 0.5);
    }

    #[test]
    fn test_overlap_moves_the_summit() {
        let (time, signal) = generate_chromatogram();
        let mut argmax = 0;
        for (i, &y) in signal.iter().enumerate() {
            if y > signal[argmax] {
                argmax = i;
            }
        }
        // the broad tails merge into a single hump just past 5 minutes
        assert!(time[argmax] > 5.0 && time[argmax] < 5.5);
        assert!(signal[argmax] > 240.0 && signal[argmax] < 250.0);
    }

    #[test]
    fn test_mass_spectrum_reference_data() {
        let (mass_to_charge, intensities) = generate_mass_spectrum();
        assert_eq!(mass_to_charge, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
        assert_eq!(intensities, vec![10.0, 40.0, 80.0, 20.0, 60.0]);
    }
}
