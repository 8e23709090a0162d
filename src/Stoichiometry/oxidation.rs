//! Oxidation state assignment for simple compounds.
//!
//! The rule set is deliberately small: a binary compound written as an
//! alkali metal followed by a halogen is assigned +1/-1, every other case
//! gets 0 for all elements. No redox bookkeeping beyond that is attempted.

use std::collections::HashMap;

use super::formula_parser::{ParseError, parse_formula_tokens};

const ALKALI_METALS: &[&str] = &["Na", "K", "Li"];
const HALOGENS: &[&str] = &["Cl", "F", "Br", "I"];

pub fn oxidation_states(formula: &str) -> Result<HashMap<String, i32>, ParseError> {
    let tokens = parse_formula_tokens(formula)?;
    // distinct elements in formula order, the rule is order sensitive
    let mut elements: Vec<String> = Vec::new();
    for (symbol, _) in &tokens {
        if !elements.contains(symbol) {
            elements.push(symbol.clone());
        }
    }

    if elements.len() == 2 {
        let first = elements[0].as_str();
        let second = elements[1].as_str();
        if ALKALI_METALS.contains(&first) && HALOGENS.contains(&second) {
            return Ok(HashMap::from([
                (elements[0].clone(), 1),
                (elements[1].clone(), -1),
            ]));
        }
    }
    Ok(elements.into_iter().map(|element| (element, 0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ionic_binary_compounds() {
        for formula in ["NaCl", "KBr", "LiF", "NaI"] {
            let states = oxidation_states(formula).unwrap();
            assert_eq!(states.len(), 2);
            assert!(states.values().any(|&s| s == 1));
            assert!(states.values().any(|&s| s == -1));
        }
        let states = oxidation_states("NaCl").unwrap();
        assert_eq!(states["Na"], 1);
        assert_eq!(states["Cl"], -1);
    }

    #[test]
    fn test_everything_else_is_zero() {
        let states = oxidation_states("H2O").unwrap();
        assert_eq!(states, HashMap::from([("H".to_string(), 0), ("O".to_string(), 0)]));

        let states = oxidation_states("C6H12O6").unwrap();
        assert!(states.values().all(|&s| s == 0));

        // the rule reads the formula left to right, halogen-first does not match
        let states = oxidation_states("ClNa").unwrap();
        assert!(states.values().all(|&s| s == 0));

        let states = oxidation_states("O2").unwrap();
        assert_eq!(states, HashMap::from([("O".to_string(), 0)]));
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(oxidation_states("Na(Cl)").is_err());
    }
}
