pub fn stoichiometry_examples(task: usize) {
    //

    match task {
        0 => {
            // FORMULA PARSING AND MOLAR MASSES
            use crate::Stoichiometry::formula_parser::parse_formula;
            use crate::Stoichiometry::molmass::{
                element_composition_matrix, molar_mass, molar_mass_of_vector,
            };
            let formula = "C6H12O6";
            let counts = parse_formula(formula).unwrap();
            println!("Element counts: {:?}", counts);
            println!("Molar mass: {:?} g/mol", molar_mass(formula).unwrap());

            let formulae = vec![
                "H2O".to_string(),
                "NaCl".to_string(),
                "C6H8O6".to_string(),
                "CO2".to_string(),
            ];
            let expected = vec![18.015, 58.443, 176.124, 44.009];
            let masses = molar_mass_of_vector(&formulae).unwrap();
            for (i, mass) in masses.iter().enumerate() {
                println!("molar mass of {}: {:?} g/mol", formulae[i], mass);
                assert!((mass - expected[i]).abs() < 1e-2);
            }

            let (matrix, elements) = element_composition_matrix(&formulae).unwrap();
            println!("elements: {:?}", elements);
            println!("{}", matrix);
        }
        1 => {
            // EQUATION BALANCING
            use crate::Stoichiometry::balancer::balance;
            let reactants = vec!["H2".to_string(), "O2".to_string()];
            let products = vec!["H2O".to_string()];
            let (r, p) = balance(&reactants, &products).unwrap();
            println!("H2 + O2 -> H2O balances as {:?} / {:?}", r, p);
            assert_eq!((r, p), (vec![2, 1], vec![2]));

            let reactants = vec!["KMnO4".to_string(), "HCl".to_string()];
            let products = vec![
                "KCl".to_string(),
                "MnCl2".to_string(),
                "H2O".to_string(),
                "Cl2".to_string(),
            ];
            let (r, p) = balance(&reactants, &products).unwrap();
            println!("permanganate redox balances as {:?} / {:?}", r, p);
            assert_eq!((r, p), (vec![2, 16], vec![2, 2, 8, 5]));
        }
        2 => {
            // FULL REACTION REPORT
            use crate::Stoichiometry::analyzer::ReactionAnalyzer;
            let mut analyzer = ReactionAnalyzer::from_strings("C3H8 + O2", "CO2 + H2O");
            analyzer.analyze().unwrap();
            println!("{}", analyzer.balanced_equation().unwrap());
            analyzer.pretty_print_report();
            println!("{}", analyzer.to_json().unwrap());
        }
        3 => {
            // WHAT THE BALANCER REJECTS
            use crate::Stoichiometry::balancer::{balance, balance_underdetermined};
            let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
                (vec!["CH4", "H2O"], vec!["CO2"]),
                (vec!["C", "CO"], vec!["CO2"]),
                (vec!["H2", "He"], vec!["H2"]),
                (vec!["C", "O2"], vec!["CO", "CO2"]),
            ];
            for (reactants, products) in cases {
                let reactants: Vec<String> = reactants.iter().map(|s| s.to_string()).collect();
                let products: Vec<String> = products.iter().map(|s| s.to_string()).collect();
                match balance(&reactants, &products) {
                    Ok(found) => println!("{:?} -> {:?}: {:?}", reactants, products, found),
                    Err(e) => println!("{:?} -> {:?}: {}", reactants, products, e),
                }
            }
            // the last case above has a two-dimensional solution space and
            // can still be resolved by combining the basis vectors
            let reactants = vec!["C".to_string(), "O2".to_string()];
            let products = vec!["CO".to_string(), "CO2".to_string()];
            let (r, p) = balance_underdetermined(&reactants, &products).unwrap();
            println!("combined basis: {:?} / {:?}", r, p);
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
