//! Periodic table data used for molar masses and oxidation state assignment.
//!
//! Atomic masses in g/mol, electronegativity on the Pauling scale. Noble
//! gases carry electronegativity 0.0. The oxidation_states slices list the
//! common states only.

// Struct to hold element data
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub symbol: &'static str,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub electronegativity: f64,
    pub oxidation_states: &'static [i32],
}

// List of elements H through Kr and their data
pub const ELEMENTS: &[Element] = &[
    Element {
        symbol: "H",
        atomic_number: 1,
        atomic_mass: 1.008,
        electronegativity: 2.20,
        oxidation_states: &[-1, 1],
    },
    Element {
        symbol: "He",
        atomic_number: 2,
        atomic_mass: 4.0026,
        electronegativity: 0.0,
        oxidation_states: &[0],
    },
    Element {
        symbol: "Li",
        atomic_number: 3,
        atomic_mass: 6.94,
        electronegativity: 0.98,
        oxidation_states: &[1],
    },
    Element {
        symbol: "Be",
        atomic_number: 4,
        atomic_mass: 9.0122,
        electronegativity: 1.57,
        oxidation_states: &[2],
    },
    Element {
        symbol: "B",
        atomic_number: 5,
        atomic_mass: 10.81,
        electronegativity: 2.04,
        oxidation_states: &[3],
    },
    Element {
        symbol: "C",
        atomic_number: 6,
        atomic_mass: 12.011,
        electronegativity: 2.55,
        oxidation_states: &[-4, -3, -2, -1, 1, 2, 3, 4],
    },
    Element {
        symbol: "N",
        atomic_number: 7,
        atomic_mass: 14.007,
        electronegativity: 3.04,
        oxidation_states: &[-3, -2, -1, 1, 2, 3, 4, 5],
    },
    Element {
        symbol: "O",
        atomic_number: 8,
        atomic_mass: 15.999,
        electronegativity: 3.44,
        oxidation_states: &[-2, -1, 1, 2],
    },
    Element {
        symbol: "F",
        atomic_number: 9,
        atomic_mass: 18.998,
        electronegativity: 3.98,
        oxidation_states: &[-1],
    },
    Element {
        symbol: "Ne",
        atomic_number: 10,
        atomic_mass: 20.18,
        electronegativity: 0.0,
        oxidation_states: &[0],
    },
    Element {
        symbol: "Na",
        atomic_number: 11,
        atomic_mass: 22.99,
        electronegativity: 0.93,
        oxidation_states: &[1],
    },
    Element {
        symbol: "Mg",
        atomic_number: 12,
        atomic_mass: 24.305,
        electronegativity: 1.31,
        oxidation_states: &[2],
    },
    Element {
        symbol: "Al",
        atomic_number: 13,
        atomic_mass: 26.98,
        electronegativity: 1.61,
        oxidation_states: &[3],
    },
    Element {
        symbol: "Si",
        atomic_number: 14,
        atomic_mass: 28.085,
        electronegativity: 1.90,
        oxidation_states: &[-4, 4],
    },
    Element {
        symbol: "P",
        atomic_number: 15,
        atomic_mass: 30.974,
        electronegativity: 2.19,
        oxidation_states: &[-3, 3, 5],
    },
    Element {
        symbol: "S",
        atomic_number: 16,
        atomic_mass: 32.065,
        electronegativity: 2.58,
        oxidation_states: &[-2, 2, 4, 6],
    },
    Element {
        symbol: "Cl",
        atomic_number: 17,
        atomic_mass: 35.45,
        electronegativity: 3.16,
        oxidation_states: &[-1, 1, 3, 5, 7],
    },
    Element {
        symbol: "Ar",
        atomic_number: 18,
        atomic_mass: 39.948,
        electronegativity: 0.0,
        oxidation_states: &[0],
    },
    Element {
        symbol: "K",
        atomic_number: 19,
        atomic_mass: 39.102,
        electronegativity: 0.82,
        oxidation_states: &[1],
    },
    Element {
        symbol: "Ca",
        atomic_number: 20,
        atomic_mass: 40.08,
        electronegativity: 1.00,
        oxidation_states: &[2],
    },
    Element {
        symbol: "Sc",
        atomic_number: 21,
        atomic_mass: 44.9559,
        electronegativity: 1.36,
        oxidation_states: &[3],
    },
    Element {
        symbol: "Ti",
        atomic_number: 22,
        atomic_mass: 47.867,
        electronegativity: 1.54,
        oxidation_states: &[2, 3, 4],
    },
    Element {
        symbol: "V",
        atomic_number: 23,
        atomic_mass: 50.9415,
        electronegativity: 1.63,
        oxidation_states: &[2, 3, 4, 5],
    },
    Element {
        symbol: "Cr",
        atomic_number: 24,
        atomic_mass: 51.9961,
        electronegativity: 1.66,
        oxidation_states: &[2, 3, 6],
    },
    Element {
        symbol: "Mn",
        atomic_number: 25,
        atomic_mass: 54.938,
        electronegativity: 1.55,
        oxidation_states: &[2, 3, 4, 6, 7],
    },
    Element {
        symbol: "Fe",
        atomic_number: 26,
        atomic_mass: 55.845,
        electronegativity: 1.83,
        oxidation_states: &[2, 3],
    },
    Element {
        symbol: "Co",
        atomic_number: 27,
        atomic_mass: 58.933,
        electronegativity: 1.88,
        oxidation_states: &[2, 3],
    },
    Element {
        symbol: "Ni",
        atomic_number: 28,
        atomic_mass: 58.69,
        electronegativity: 1.91,
        oxidation_states: &[2, 3],
    },
    Element {
        symbol: "Cu",
        atomic_number: 29,
        atomic_mass: 63.546,
        electronegativity: 1.90,
        oxidation_states: &[1, 2],
    },
    Element {
        symbol: "Zn",
        atomic_number: 30,
        atomic_mass: 65.38,
        electronegativity: 1.65,
        oxidation_states: &[2],
    },
    Element {
        symbol: "Ga",
        atomic_number: 31,
        atomic_mass: 69.723,
        electronegativity: 1.81,
        oxidation_states: &[3],
    },
    Element {
        symbol: "Ge",
        atomic_number: 32,
        atomic_mass: 72.64,
        electronegativity: 2.01,
        oxidation_states: &[-4, 2, 4],
    },
    Element {
        symbol: "As",
        atomic_number: 33,
        atomic_mass: 74.9216,
        electronegativity: 2.18,
        oxidation_states: &[-3, 3, 5],
    },
    Element {
        symbol: "Se",
        atomic_number: 34,
        atomic_mass: 78.96,
        electronegativity: 2.55,
        oxidation_states: &[-2, 2, 4, 6],
    },
    Element {
        symbol: "Br",
        atomic_number: 35,
        atomic_mass: 79.904,
        electronegativity: 2.96,
        oxidation_states: &[-1, 1, 3, 5, 7],
    },
    Element {
        symbol: "Kr",
        atomic_number: 36,
        atomic_mass: 83.798,
        electronegativity: 3.00,
        oxidation_states: &[0, 2],
    },
    // Add more elements here...
];

/// Look up an element by its symbol
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Atomic mass of an element symbol, if the symbol is known
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    element_by_symbol(symbol).map(|e| e.atomic_mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_lookup() {
        let na = element_by_symbol("Na").unwrap();
        assert_eq!(na.atomic_number, 11);
        assert!((na.atomic_mass - 22.99).abs() < 1e-6);
        assert!((na.electronegativity - 0.93).abs() < 1e-6);
        assert_eq!(na.oxidation_states, &[1]);

        assert!(element_by_symbol("Xx").is_none());
        assert!(element_by_symbol("").is_none());
    }

    #[test]
    fn test_atomic_numbers_are_ordered() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.atomic_number as usize, i + 1);
        }
    }

    #[test]
    fn test_atomic_mass() {
        assert!((atomic_mass("H").unwrap() - 1.008).abs() < 1e-6);
        assert!(atomic_mass("Uue").is_none());
    }
}
