//! Lumped-yield biomass pyrolysis: a feed mass is split into oil, gas and
//! char product lumps by fixed mass fractions. No kinetics, pure bookkeeping
//! with conservation checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("yield fractions must sum to 1, got {0}")]
    InvalidYieldSplit(f64),
    #[error("yield fraction must be nonnegative, got {0}")]
    NegativeYield(f64),
    #[error("mass must be nonnegative, got {0}")]
    NegativeMass(f64),
}

/// Mass fractions of the three product lumps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyrolysisYields {
    pub oil_yield: f64,
    pub gas_yield: f64,
    pub char_yield: f64,
}

impl Default for PyrolysisYields {
    /// Typical fast pyrolysis split: 60% oil, 30% gas, 10% char
    fn default() -> Self {
        Self {
            oil_yield: 0.6,
            gas_yield: 0.3,
            char_yield: 0.1,
        }
    }
}

impl PyrolysisYields {
    pub fn sum(&self) -> f64 {
        self.oil_yield + self.gas_yield + self.char_yield
    }
}

/// Product masses, same unit as the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyrolysisProducts {
    pub oil_mass: f64,
    pub gas_mass: f64,
    pub char_mass: f64,
}

/// Split a biomass feed into oil, gas and char by the given yields.
///
/// The fractions must be nonnegative and sum to 1 within 1e-9, so the
/// product masses add back up to the feed mass.
pub fn pyrolyze(
    biomass_mass: f64,
    yields: &PyrolysisYields,
) -> Result<PyrolysisProducts, ProcessError> {
    if biomass_mass < 0.0 {
        return Err(ProcessError::NegativeMass(biomass_mass));
    }
    for fraction in [yields.oil_yield, yields.gas_yield, yields.char_yield] {
        if fraction < 0.0 {
            return Err(ProcessError::NegativeYield(fraction));
        }
    }
    let total = yields.sum();
    if (total - 1.0).abs() > 1e-9 {
        return Err(ProcessError::InvalidYieldSplit(total));
    }
    Ok(PyrolysisProducts {
        oil_mass: biomass_mass * yields.oil_yield,
        gas_mass: biomass_mass * yields.gas_yield,
        char_mass: biomass_mass * yields.char_yield,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_split() {
        let products = pyrolyze(100.0, &PyrolysisYields::default()).unwrap();
        assert_relative_eq!(products.oil_mass, 60.0, epsilon = 1e-9);
        assert_relative_eq!(products.gas_mass, 30.0, epsilon = 1e-9);
        assert_relative_eq!(products.char_mass, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_is_conserved() {
        for mass in [0.0, 1.0, 37.5, 1e6] {
            let products = pyrolyze(mass, &PyrolysisYields::default()).unwrap();
            let total = products.oil_mass + products.gas_mass + products.char_mass;
            assert_relative_eq!(total, mass, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_custom_split() {
        let yields = PyrolysisYields {
            oil_yield: 0.5,
            gas_yield: 0.25,
            char_yield: 0.25,
        };
        let products = pyrolyze(8.0, &yields).unwrap();
        assert_relative_eq!(products.oil_mass, 4.0, epsilon = 1e-12);
        assert_relative_eq!(products.gas_mass, 2.0, epsilon = 1e-12);
        assert_relative_eq!(products.char_mass, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_split_is_rejected() {
        let yields = PyrolysisYields {
            oil_yield: 0.5,
            gas_yield: 0.3,
            char_yield: 0.1,
        };
        match pyrolyze(10.0, &yields) {
            Err(ProcessError::InvalidYieldSplit(sum)) => {
                assert_relative_eq!(sum, 0.9, epsilon = 1e-9)
            }
            other => panic!("expected InvalidYieldSplit, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        match pyrolyze(-1.0, &PyrolysisYields::default()) {
            Err(ProcessError::NegativeMass(m)) => assert_eq!(m, -1.0),
            other => panic!("expected NegativeMass, got {:?}", other),
        }
        let yields = PyrolysisYields {
            oil_yield: 1.5,
            gas_yield: -0.5,
            char_yield: 0.0,
        };
        match pyrolyze(10.0, &yields) {
            Err(ProcessError::NegativeYield(y)) => assert_eq!(y, -0.5),
            other => panic!("expected NegativeYield, got {:?}", other),
        }
    }
}
