//! Reference band positions for the supported spectroscopy kinds and the
//! peak record the analysis functions produce. Ranges are (low, high) pairs
//! in the natural unit of each method: cm-1 for IR, nm for UV-Vis, ppm for
//! NMR chemical shifts.

use serde::{Deserialize, Serialize};

/// Characteristic IR absorption ranges of common functional groups, cm-1
pub const IR_FUNCTIONAL_GROUPS: &[(&str, (f64, f64))] = &[
    ("O-H stretch", (3200.0, 3600.0)),
    ("N-H stretch", (3300.0, 3500.0)),
    ("C-H stretch", (2850.0, 3000.0)),
    ("C=O stretch", (1670.0, 1780.0)),
    ("C=C stretch", (1620.0, 1680.0)),
    ("C≡N stretch", (2200.0, 2260.0)),
    ("NO₂ stretch", (1500.0, 1570.0)),
];

/// UV-Vis absorption ranges of common chromophores, nm
pub const UV_CHROMOPHORES: &[(&str, (f64, f64))] = &[
    ("C=C", (170.0, 190.0)),
    ("C=O", (270.0, 290.0)),
    ("C=N", (230.0, 250.0)),
    ("C≡C", (170.0, 180.0)),
    ("Benzene", (230.0, 270.0)),
];

/// Proton NMR chemical shift ranges, ppm
pub const NMR_SHIFTS: &[(&str, (f64, f64))] = &[
    ("CH3", (0.7, 1.3)),
    ("CH2", (1.2, 1.4)),
    ("CH", (1.4, 1.7)),
    ("OH", (1.5, 5.5)),
    ("Aromatic", (6.5, 8.5)),
];

/// Range of a named band, `None` if the table does not know the name
pub fn band_range(table: &[(&str, (f64, f64))], name: &str) -> Option<(f64, f64)> {
    table
        .iter()
        .find(|(band, _)| *band == name)
        .map(|(_, range)| *range)
}

/// One detected peak: where it sits, how tall it is, what it looks like
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralPeak {
    /// position on the spectrum axis, in the unit of the method
    pub position: f64,
    pub intensity: f64,
    /// band name from the reference table, or "Unknown"
    pub assignment: String,
    /// width at half maximum, in samples
    pub width: f64,
}
