//! Molar masses and atomic composition matrices of chemical compounds.
//! This is where unknown element symbols surface: the parser lets them
//! through, the periodic table lookup here does not.

use nalgebra::DMatrix;
use thiserror::Error;

use super::formula_parser::{ParseError, parse_compound_list, parse_formula_tokens};
use super::periodic_table::element_by_symbol;

#[derive(Debug, Error)]
pub enum CompositionError {
    #[error("formula error: {0}")]
    Parse(#[from] ParseError),
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),
}

/// Molar mass of a compound in g/mol
pub fn molar_mass(formula: &str) -> Result<f64, CompositionError> {
    let mut total = 0.0;
    for (symbol, count) in parse_formula_tokens(formula)? {
        let element = element_by_symbol(&symbol)
            .ok_or_else(|| CompositionError::UnknownElement(symbol.clone()))?;
        total += element.atomic_mass * count as f64;
    }
    Ok(total)
}

/// Molar masses of a list of compounds, in list order
pub fn molar_mass_of_vector(formulae: &[String]) -> Result<Vec<f64>, CompositionError> {
    formulae.iter().map(|formula| molar_mass(formula)).collect()
}

/// Atomic composition matrix of a list of substances: one row per substance,
/// one column per element. The element order (first appearance across the
/// list) is returned alongside the matrix.
pub fn element_composition_matrix(
    formulae: &[String],
) -> Result<(DMatrix<f64>, Vec<String>), ParseError> {
    let (compositions, elements) = parse_compound_list(formulae)?;
    let mut matrix = DMatrix::zeros(formulae.len(), elements.len());
    for (i, composition) in compositions.iter().enumerate() {
        for (j, element) in elements.iter().enumerate() {
            if let Some(&count) = composition.get(element) {
                matrix[(i, j)] = count as f64;
            }
        }
    }
    Ok((matrix, elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molar_mass() {
        let expected = [("H2O", 18.015), ("NaCl", 58.44), ("C6H12O6", 180.156)];
        for (formula, mass) in expected {
            assert!((molar_mass(formula).unwrap() - mass).abs() < 1e-2);
        }
    }

    #[test]
    fn test_molar_mass_unknown_element() {
        let err = molar_mass("Xy2O").unwrap_err();
        match err {
            CompositionError::UnknownElement(symbol) => assert_eq!(symbol, "Xy"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_molar_mass_parse_error_propagates() {
        assert!(matches!(
            molar_mass("Ca(NO3)2"),
            Err(CompositionError::Parse(_))
        ));
    }

    #[test]
    fn test_molar_mass_of_vector() {
        let formulae: Vec<String> = ["H2O", "NaCl", "CH4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let masses = molar_mass_of_vector(&formulae).unwrap();
        let expected = [18.015, 58.44, 16.043];
        for (calculated, reference) in masses.iter().zip(expected.iter()) {
            assert!((calculated - reference).abs() < 1e-2);
        }
    }

    #[test]
    fn test_element_composition_matrix() {
        let formulae: Vec<String> = ["H2O", "NaCl", "C3H8", "CH4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (matrix, elements) = element_composition_matrix(&formulae).unwrap();
        // 4 substances over 5 distinct elements, first-appearance order
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 5);
        assert_eq!(elements, vec!["H", "O", "Na", "Cl", "C"]);
        // H2O row
        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(0, 1)], 1.0);
        assert_eq!(matrix[(0, 4)], 0.0);
        // CH4 row
        assert_eq!(matrix[(3, 0)], 4.0);
        assert_eq!(matrix[(3, 4)], 1.0);
    }
}
