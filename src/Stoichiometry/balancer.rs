//! # Chemical Equation Balancer
//!
//! ## Aim
//! Finds the smallest positive integer coefficients that balance a chemical
//! reaction, given the reactant and product formulae as separate lists.
//! The balanced coefficients span the null space of the stoichiometry
//! matrix: one row per element, one column per compound, with product
//! counts negated.
//!
//! ## Main Data Structures and Logic
//! - the element count matrix is built over `malachite::Rational` and
//!   reduced by Gauss-Jordan elimination, so the whole computation is exact,
//!   no floating point tolerances are involved anywhere
//! - a single free column in the reduced matrix yields the kernel basis
//!   vector; its entries are scaled by the lcm of the denominators and
//!   reduced by the gcd of the entries to the minimal integer solution
//! - an inspection copy of the matrix is available as `DMatrix<f64>` via
//!   [`stoichiometry_matrix`]
//!
//! ## Key Methods
//! - [`balance`]: the strict entry point, rejects reactions whose null space
//!   dimension is not exactly 1
//! - [`balance_underdetermined`]: opt-in fallback that resolves a null space
//!   of dimension > 1 by summing its basis vectors
//! - [`gauss_jordan`]: in-place reduced row echelon form over rationals
//!
//! ## Usage
//! ```rust, ignore
//! let reactants = vec!["H2".to_string(), "O2".to_string()];
//! let products = vec!["H2O".to_string()];
//! let (r, p) = balance(&reactants, &products)?;
//! assert_eq!((r, p), (vec![2, 1], vec![2]));
//! ```

use log::info;
use malachite::num::arithmetic::traits::{Abs, Gcd, Lcm};
use malachite::num::basic::traits::{One, Zero};
use malachite::{Natural, Rational};
use nalgebra::DMatrix;
use thiserror::Error;

use super::formula_parser::{ParseError, parse_compound_list};

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("formula error: {0}")]
    Parse(#[from] ParseError),
    #[error("no solution: the stoichiometry matrix has an empty null space")]
    NoSolution,
    #[error("reaction is underdetermined: null space dimension is {dimension}")]
    Underdetermined { dimension: usize },
    #[error("degenerate solution: compound '{compound}' gets coefficient 0")]
    DegenerateSolution { compound: String },
    #[error("solution vector mixes positive and negative coefficients")]
    InconsistentSign,
    #[error("balanced coefficients overflow i64")]
    CoefficientOverflow,
}

/// Build the real-valued stoichiometry matrix of a reaction for inspection.
///
/// Rows are elements (in first-appearance order, also returned), columns are
/// compounds in caller order, reactants first. Product columns are negated,
/// so a balanced coefficient vector lies in the null space of this matrix.
pub fn stoichiometry_matrix(
    reactants: &[String],
    products: &[String],
) -> Result<(DMatrix<f64>, Vec<String>), ParseError> {
    let mut compounds: Vec<String> = Vec::with_capacity(reactants.len() + products.len());
    compounds.extend_from_slice(reactants);
    compounds.extend_from_slice(products);
    let (compositions, elements) = parse_compound_list(&compounds)?;

    let mut matrix = DMatrix::zeros(elements.len(), compounds.len());
    for (i, element) in elements.iter().enumerate() {
        for (j, composition) in compositions.iter().enumerate() {
            if let Some(&count) = composition.get(element) {
                matrix[(i, j)] = if j < reactants.len() {
                    count as f64
                } else {
                    -(count as f64)
                };
            }
        }
    }
    Ok((matrix, elements))
}

/// Balance a reaction, returning positive integer coefficients for the
/// reactants and the products in caller order.
///
/// The coefficients are exact, minimal (their collective gcd is 1) and
/// deterministic. A reaction whose null space dimension is not exactly 1 is
/// rejected: dimension 0 is [`BalanceError::NoSolution`], dimension > 1 is
/// [`BalanceError::Underdetermined`].
pub fn balance(
    reactants: &[String],
    products: &[String],
) -> Result<(Vec<i64>, Vec<i64>), BalanceError> {
    balance_inner(reactants, products, false)
}

/// Like [`balance`], but an underdetermined reaction (null space dimension
/// above 1) is resolved by summing the kernel basis vectors, which keeps
/// every compound in play. The combination is deterministic but arbitrary:
/// the same atoms admit other balanced equations.
pub fn balance_underdetermined(
    reactants: &[String],
    products: &[String],
) -> Result<(Vec<i64>, Vec<i64>), BalanceError> {
    balance_inner(reactants, products, true)
}

fn balance_inner(
    reactants: &[String],
    products: &[String],
    combine_basis: bool,
) -> Result<(Vec<i64>, Vec<i64>), BalanceError> {
    let mut compounds: Vec<String> = Vec::with_capacity(reactants.len() + products.len());
    compounds.extend_from_slice(reactants);
    compounds.extend_from_slice(products);
    let (compositions, elements) = parse_compound_list(&compounds)?;

    let n_compounds = compounds.len();
    let n_elements = elements.len();

    // element count matrix over exact rationals, product columns negated
    let mut matrix: Vec<Vec<Rational>> = Vec::with_capacity(n_elements);
    for element in &elements {
        let mut row: Vec<Rational> = Vec::with_capacity(n_compounds);
        for (j, composition) in compositions.iter().enumerate() {
            let count = *composition.get(element).unwrap_or(&0) as i64;
            let signed = if j < reactants.len() { count } else { -count };
            row.push(Rational::from(signed));
        }
        matrix.push(row);
    }

    let pivots = gauss_jordan(&mut matrix, n_elements, n_compounds);
    let free_cols: Vec<usize> = (0..n_compounds).filter(|c| !pivots.contains(c)).collect();
    let nullity = free_cols.len();
    if nullity == 0 {
        return Err(BalanceError::NoSolution);
    }
    if nullity > 1 && !combine_basis {
        return Err(BalanceError::Underdetermined { dimension: nullity });
    }

    // kernel basis vector of a free column: its own coordinate is 1, every
    // pivot coordinate is read off the reduced matrix with flipped sign.
    // With combine_basis the basis vectors of all free columns are summed.
    let mut kernel: Vec<Rational> = vec![Rational::ZERO; n_compounds];
    for &f in &free_cols {
        kernel[f] = Rational::ONE;
        for (row, &col) in pivots.iter().enumerate() {
            kernel[col] -= matrix[row][f].clone();
        }
    }

    // clear denominators with their lcm, then reduce by the gcd of the entries
    let mut lcm = Natural::ONE;
    for x in kernel.iter() {
        lcm = lcm.lcm(x.denominator_ref());
    }
    let lcm = Rational::from(&lcm);
    let mut gcd = Natural::ZERO;
    for x in kernel.iter_mut() {
        *x = &*x * &lcm;
        gcd = gcd.gcd(x.numerator_ref());
    }
    // the free coordinate is nonzero, so gcd >= 1
    let gcd = Rational::from(&gcd);
    let mut coefficients: Vec<i64> = Vec::with_capacity(n_compounds);
    for x in kernel.iter() {
        let reduced = x / &gcd;
        let value = i64::try_from(&reduced).map_err(|_| BalanceError::CoefficientOverflow)?;
        coefficients.push(value);
    }

    if let Some(idx) = coefficients.iter().position(|&c| c == 0) {
        return Err(BalanceError::DegenerateSolution {
            compound: compounds[idx].clone(),
        });
    }

    let has_positive = coefficients.iter().any(|&c| c > 0);
    let has_negative = coefficients.iter().any(|&c| c < 0);
    if has_positive && has_negative {
        return Err(BalanceError::InconsistentSign);
    }
    if has_negative {
        for c in coefficients.iter_mut() {
            *c = -*c;
        }
    }

    let product_coefficients = coefficients.split_off(reactants.len());
    info!(
        "balanced {:?} -> {:?} with coefficients {:?} / {:?}",
        reactants, products, coefficients, product_coefficients
    );
    Ok((coefficients, product_coefficients))
}

/// Gauss-Jordan elimination over exact rationals.
///
/// Reduces `matrix` (m rows, n columns) to reduced row echelon form in place
/// and returns the pivot column of every pivot row, in row order.
pub fn gauss_jordan(matrix: &mut [Vec<Rational>], m: usize, n: usize) -> Vec<usize> {
    let mut pivots = Vec::new();
    let mut row = 0;
    let mut col = 0;
    while row < m && col < n {
        // take the row with the largest entry in this column as pivot row
        let mut i_max = row;
        for i in (row + 1)..m {
            if (&matrix[i][col]).abs() > (&matrix[i_max][col]).abs() {
                i_max = i;
            }
        }

        if matrix[i_max][col] == Rational::ZERO {
            col += 1;
            continue;
        }
        matrix.swap(row, i_max);

        let pivot = matrix[row][col].clone();
        for j in col..n {
            let scaled = &matrix[row][j] / &pivot;
            matrix[row][j] = scaled;
        }
        for i in 0..m {
            if i == row || matrix[i][col] == Rational::ZERO {
                continue;
            }
            let factor = matrix[i][col].clone();
            matrix[i][col] = Rational::ZERO;
            for j in (col + 1)..n {
                let sub = &factor * &matrix[row][j];
                matrix[i][j] -= sub;
            }
        }

        pivots.push(col);
        row += 1;
        col += 1;
    }
    pivots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational_matrix(rows: &[&[i64]]) -> Vec<Vec<Rational>> {
        rows.iter()
            .map(|row| row.iter().map(|&x| Rational::from(x)).collect())
            .collect()
    }

    #[test]
    fn test_gauss_jordan_full_rank() {
        let mut matrix = rational_matrix(&[&[2, 1], &[1, 3]]);
        let pivots = gauss_jordan(&mut matrix, 2, 2);
        assert_eq!(pivots, vec![0, 1]);
        assert_eq!(
            matrix,
            rational_matrix(&[&[1, 0], &[0, 1]])
        );
    }

    #[test]
    fn test_gauss_jordan_rank_deficient() {
        // second column is -2 times the first, third is independent
        let mut matrix = rational_matrix(&[&[1, -2, 0], &[2, -4, 1]]);
        let pivots = gauss_jordan(&mut matrix, 2, 3);
        assert_eq!(pivots, vec![0, 2]);
        assert_eq!(
            matrix,
            rational_matrix(&[&[1, -2, 0], &[0, 0, 1]])
        );
    }

    #[test]
    fn test_gauss_jordan_zero_matrix() {
        let mut matrix = rational_matrix(&[&[0, 0], &[0, 0]]);
        let pivots = gauss_jordan(&mut matrix, 2, 2);
        assert!(pivots.is_empty());
    }
}
