//! # Chemical Formula Parser
//!
//! ## Aim
//! Turns a plain chemical formula like "C6H12O6" into a map of element
//! symbols to atom counts. A symbol is one uppercase ASCII letter followed
//! by zero or more lowercase letters, an optional decimal count follows
//! (absent count means 1). Repeated symbols sum: "H2OH" gives H:3, O:1.
//!
//! Brackets, hydrate dots, phase marks and stray characters are rejected
//! with [`ParseError::InvalidToken`]; group expansion like "(NO3)2" is
//! deliberately not performed here. Element symbols are NOT checked against
//! the periodic table: "Xy3" parses fine, the molar mass module is the
//! place where unknown symbols are caught.

use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Element symbol -> atom count. Every count stored is >= 1.
pub type FormulaCounts = HashMap<String, usize>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty formula")]
    EmptyFormula,
    #[error("invalid token '{fragment}' at position {position} in formula '{formula}'")]
    InvalidToken {
        formula: String,
        fragment: String,
        position: usize,
    },
}

/// Parse a formula into the ordered list of (symbol, count) tokens.
///
/// Order of first appearance is preserved, repeated symbols stay repeated.
/// Tokens with an explicit zero count ("H0") are dropped. The whole input
/// must be covered by valid tokens, otherwise the uncovered fragment is
/// reported.
pub fn parse_formula_tokens(formula: &str) -> Result<Vec<(String, usize)>, ParseError> {
    if formula.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    let re = Regex::new(r"([A-Z][a-z]*)(\d*)").unwrap();
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for caps in re.captures_iter(formula) {
        let whole = caps.get(0).unwrap();
        if whole.start() != cursor {
            return Err(ParseError::InvalidToken {
                formula: formula.to_string(),
                fragment: formula[cursor..whole.start()].to_string(),
                position: cursor,
            });
        }
        let symbol = caps.get(1).unwrap().as_str();
        let digits = caps.get(2).unwrap().as_str();
        let count: usize = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| ParseError::InvalidToken {
                formula: formula.to_string(),
                fragment: digits.to_string(),
                position: whole.start() + symbol.len(),
            })?
        };
        // an explicit zero count means the element is simply not there
        if count > 0 {
            tokens.push((symbol.to_string(), count));
        }
        cursor = whole.end();
    }
    if cursor != formula.len() {
        return Err(ParseError::InvalidToken {
            formula: formula.to_string(),
            fragment: formula[cursor..].to_string(),
            position: cursor,
        });
    }
    Ok(tokens)
}

/// Parse a formula into element counts, occurrences of the same symbol summed
pub fn parse_formula(formula: &str) -> Result<FormulaCounts, ParseError> {
    let mut counts: FormulaCounts = HashMap::new();
    for (symbol, count) in parse_formula_tokens(formula)? {
        *counts.entry(symbol).or_insert(0) += count;
    }
    Ok(counts)
}

/// Parse a list of compounds, also collecting the distinct elements in
/// first-appearance order across the whole list. That order is what keeps
/// matrices built from the list reproducible between runs.
pub fn parse_compound_list(
    compounds: &[String],
) -> Result<(Vec<FormulaCounts>, Vec<String>), ParseError> {
    let mut compositions = Vec::with_capacity(compounds.len());
    let mut elements: Vec<String> = Vec::new();
    for formula in compounds {
        let mut counts: FormulaCounts = HashMap::new();
        for (symbol, count) in parse_formula_tokens(formula)? {
            if !elements.contains(&symbol) {
                elements.push(symbol.clone());
            }
            *counts.entry(symbol).or_insert(0) += count;
        }
        compositions.push(counts);
    }
    Ok((compositions, elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formula() {
        let expected_counts = HashMap::from([
            ("C".to_string(), 6),
            ("H".to_string(), 12),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("C6H12O6").unwrap(), expected_counts);

        let expected_counts = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O").unwrap(), expected_counts);

        let expected_counts = HashMap::from([("H".to_string(), 2), ("O".to_string(), 2)]);
        assert_eq!(parse_formula("H2O2").unwrap(), expected_counts);

        // absent count defaults to 1
        let expected_counts = HashMap::from([("Na".to_string(), 1), ("Cl".to_string(), 1)]);
        assert_eq!(parse_formula("NaCl").unwrap(), expected_counts);

        // multi-letter symbols with multi-digit counts
        let expected_counts = HashMap::from([("Fe".to_string(), 12), ("O".to_string(), 18)]);
        assert_eq!(parse_formula("Fe12O18").unwrap(), expected_counts);
    }

    #[test]
    fn test_repeated_symbols_sum() {
        let expected_counts = HashMap::from([
            ("C".to_string(), 5),
            ("H".to_string(), 7),
            ("O".to_string(), 2),
        ]);
        assert_eq!(parse_formula("C5H6OOH").unwrap(), expected_counts);

        let expected_counts = HashMap::from([("H".to_string(), 4), ("O".to_string(), 2)]);
        assert_eq!(parse_formula("HOHOH2").unwrap(), expected_counts);
    }

    #[test]
    fn test_unknown_symbols_are_allowed() {
        // the parser is grammar-only, symbol validity is molmass's concern
        let expected_counts = HashMap::from([("Xy".to_string(), 123)]);
        assert_eq!(parse_formula("Xy123").unwrap(), expected_counts);
    }

    #[test]
    fn test_zero_count_means_absent() {
        let expected_counts = HashMap::from([("O".to_string(), 1)]);
        assert_eq!(parse_formula("H0O").unwrap(), expected_counts);
        assert!(parse_formula("H0").unwrap().is_empty());
    }

    #[test]
    fn test_empty_formula() {
        assert!(matches!(parse_formula(""), Err(ParseError::EmptyFormula)));
    }

    #[test]
    fn test_rejects_brackets_and_dots() {
        // bracket groups are not expanded, they are a parse error
        assert!(matches!(
            parse_formula("Ca(NO3)2"),
            Err(ParseError::InvalidToken { .. })
        ));
        // hydrate dot
        let err = parse_formula("CuSO4.5H2O").unwrap_err();
        match err {
            ParseError::InvalidToken { fragment, position, .. } => {
                assert_eq!(fragment, ".5");
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_stray_characters() {
        assert!(matches!(
            parse_formula("h2o"),
            Err(ParseError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_formula("2H2O"),
            Err(ParseError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_formula("H2O "),
            Err(ParseError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_formula("H2O+"),
            Err(ParseError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_tokens_keep_order() {
        let tokens = parse_formula_tokens("CH3COOH").unwrap();
        let expected = vec![
            ("C".to_string(), 1),
            ("H".to_string(), 3),
            ("C".to_string(), 1),
            ("O".to_string(), 1),
            ("O".to_string(), 1),
            ("H".to_string(), 1),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_parse_is_pure() {
        let first = parse_formula("C2H5OH").unwrap();
        let second = parse_formula("C2H5OH").unwrap();
        assert_eq!(first, second);
    }
}
