/// Compact periodic table: atomic masses, electronegativities and common
/// oxidation states of the lighter elements, H through Kr.
pub mod periodic_table;
/// eng
/// The module takes as input a chemical formula specified as a String and produces
/// the atomic composition of the formula: a HashMap from element symbol to the number
/// of atoms. Compounds are written in plain form: no brackets, no hydrate dots, no
/// charges. A symbol is one capital letter optionally followed by lowercase letters,
/// an omitted subscript means 1, a repeated element sums up.
/// ru
/// Модуль берет на вход химическую формулу, заданную в виде String, и выдает
/// атомный состав формулы: HashMap символ элемента -> число атомов. Скобки,
/// гидратные точки и заряды не поддерживаются.
///
/// # Examples
/// ```
/// use StoiChem::Stoichiometry::formula_parser::parse_formula;
/// let counts = parse_formula("C6H12O6").unwrap();
/// println!("Element counts: {:?}", counts);
/// assert_eq!(counts["C"], 6);
/// ```
pub mod formula_parser;
/// The module takes as input the reactant and product formulae of a reaction and
/// produces the smallest positive integer coefficients balancing it. The coefficient
/// vector is found as the null space of the element count matrix, computed exactly
/// over rationals, so the result is deterministic and free of rounding artifacts.
///
/// # Examples
/// ```
/// use StoiChem::Stoichiometry::balancer::balance;
/// let reactants = vec!["H2".to_string(), "O2".to_string()];
/// let products = vec!["H2O".to_string()];
/// let (r, p) = balance(&reactants, &products).unwrap();
/// assert_eq!((r, p), (vec![2, 1], vec![2]));
/// ```
pub mod balancer;
/// Module to calculate the molar mass of a chemical formula and the element
/// composition matrix of a list of substances
///
/// # Examples
/// ```
/// use StoiChem::Stoichiometry::molmass::molar_mass;
/// let mass = molar_mass("C6H8O6").unwrap();
/// println!("Molar mass: {:?} g/mol", mass);
/// ```
pub mod molmass;
/// Rule-of-thumb oxidation state assignment: binary alkali metal halides get
/// +1/-1, everything else is reported as zero
pub mod oxidation;
/// End-to-end reaction workflow: balance a reaction given as "A + B" strings,
/// collect molar masses and oxidation states of every compound, render the
/// balanced equation and export the whole report as JSON or a terminal table.
///
/// # Examples
/// ```
/// use StoiChem::Stoichiometry::analyzer::ReactionAnalyzer;
/// let mut analyzer = ReactionAnalyzer::from_strings("Fe + O2", "Fe2O3");
/// analyzer.analyze().unwrap();
/// analyzer.pretty_print_report();
/// println!("{}", analyzer.to_json().unwrap());
/// ```
pub mod analyzer;
