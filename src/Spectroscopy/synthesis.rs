//! # Spectrum Synthesis
//!
//! ## Aim
//! Builds synthetic IR, UV-Vis and proton NMR spectra from a list of band
//! names. Every known band contributes a unit-height Gaussian centered in
//! its reference range, unknown names are logged and skipped, and Gaussian
//! measurement noise is layered on top. The generators are deterministic
//! for a given RNG, so seeded spectra can be fed straight into the peak
//! detection in [`super::analysis`] and checked end to end.
//!
//! ## Key Methods
//! - [`generate_ir_spectrum`], [`generate_uv_vis_spectrum`],
//!   [`generate_nmr_spectrum`]: one (grid, spectrum) pair per method
//! - [`peak_profile`]: the raw Gaussian or Lorentzian line shape

use std::f64::consts::PI;

use log::warn;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use super::spectral_data::{IR_FUNCTIONAL_GROUPS, NMR_SHIFTS, UV_CHROMOPHORES, band_range};
use crate::Utils::grid::linspace;

pub const DEFAULT_NOISE_LEVEL: f64 = 0.02;

#[derive(Debug, Error)]
pub enum SpectroscopyError {
    #[error("noise level must be finite and nonnegative, got {0}")]
    InvalidNoiseLevel(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakShape {
    Gaussian,
    Lorentzian,
}

/// Line shape sampled over the grid: unit-height Gaussian or unit-area
/// Lorentzian. `width` must be positive.
pub fn peak_profile(x: &[f64], center: f64, width: f64, shape: PeakShape) -> Vec<f64> {
    x.iter()
        .map(|&xi| match shape {
            PeakShape::Gaussian => (-(xi - center).powi(2) / (2.0 * width * width)).exp(),
            PeakShape::Lorentzian => width / (PI * ((xi - center).powi(2) + width * width)),
        })
        .collect()
}

fn synthesize(
    grid: Vec<f64>,
    table: &[(&str, (f64, f64))],
    kind: &str,
    bands: &[&str],
    width_divisor: f64,
    noise_level: f64,
    rng: &mut impl Rng,
) -> Result<(Vec<f64>, Vec<f64>), SpectroscopyError> {
    let noise = Normal::new(0.0, noise_level)
        .map_err(|_| SpectroscopyError::InvalidNoiseLevel(noise_level))?;

    let mut spectrum = vec![0.0; grid.len()];
    for band in bands {
        let (center, width) = match band_range(table, band) {
            Some((low, high)) => ((low + high) / 2.0, (high - low) / 2.0 / width_divisor),
            None => {
                warn!("unknown {} band '{}', skipped", kind, band);
                continue;
            }
        };
        for (value, peak) in spectrum
            .iter_mut()
            .zip(peak_profile(&grid, center, width, PeakShape::Gaussian))
        {
            *value += peak;
        }
    }
    for value in spectrum.iter_mut() {
        *value += noise.sample(rng);
    }
    Ok((grid, spectrum))
}

/// IR spectrum of the given functional groups over 500..4000 cm-1.
/// `noise_level` defaults to 0.02 when `None`.
pub fn generate_ir_spectrum(
    functional_groups: &[&str],
    noise_level: Option<f64>,
    rng: &mut impl Rng,
) -> Result<(Vec<f64>, Vec<f64>), SpectroscopyError> {
    synthesize(
        linspace(500.0, 4000.0, 3500),
        IR_FUNCTIONAL_GROUPS,
        "IR",
        functional_groups,
        1.0,
        noise_level.unwrap_or(DEFAULT_NOISE_LEVEL),
        rng,
    )
}

/// UV-Vis spectrum of the given chromophores over 150..400 nm
pub fn generate_uv_vis_spectrum(
    chromophores: &[&str],
    noise_level: Option<f64>,
    rng: &mut impl Rng,
) -> Result<(Vec<f64>, Vec<f64>), SpectroscopyError> {
    synthesize(
        linspace(150.0, 400.0, 2500),
        UV_CHROMOPHORES,
        "UV-Vis",
        chromophores,
        1.0,
        noise_level.unwrap_or(DEFAULT_NOISE_LEVEL),
        rng,
    )
}

/// Proton NMR spectrum of the given environments over 0..10 ppm. NMR lines
/// are narrow relative to their shift ranges, so the band width is divided
/// by 5.
pub fn generate_nmr_spectrum(
    proton_environments: &[&str],
    noise_level: Option<f64>,
    rng: &mut impl Rng,
) -> Result<(Vec<f64>, Vec<f64>), SpectroscopyError> {
    synthesize(
        linspace(0.0, 10.0, 1000),
        NMR_SHIFTS,
        "NMR",
        proton_environments,
        5.0,
        noise_level.unwrap_or(DEFAULT_NOISE_LEVEL),
        rng,
    )
}
