//! # Reaction Analyzer
//!
//! ## Aim
//! The struct [`ReactionAnalyzer`] collects everything the crate knows about
//! one reaction: compound lists, balanced coefficients, molar masses and
//! oxidation states, ready for JSON export or a terminal summary table.
//! This is also the place where `"A + B"` strings are split into compound
//! lists; the balancer itself never touches separators.
//!
//! ## Usage
//! ```rust, ignore
//! let mut analyzer = ReactionAnalyzer::from_strings("H2 + O2", "H2O");
//! analyzer.analyze()?;
//! analyzer.pretty_print_report();
//! println!("{}", analyzer.to_json()?);
//! ```

use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::balancer::{BalanceError, balance};
use super::formula_parser::ParseError;
use super::molmass::{CompositionError, molar_mass};
use super::oxidation::oxidation_states;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("formula error: {0}")]
    Parse(#[from] ParseError),
    #[error("balance error: {0}")]
    Balance(#[from] BalanceError),
    #[error("composition error: {0}")]
    Composition(#[from] CompositionError),
}

/// Serializable summary of an analyzed reaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionReport {
    pub balanced_equation: String,
    pub reactant_coefficients: Vec<i64>,
    pub product_coefficients: Vec<i64>,
    /// molar mass of every compound, g/mol
    pub molar_masses: HashMap<String, f64>,
    /// oxidation states per compound, per element
    pub oxidation_states: HashMap<String, HashMap<String, i32>>,
}

/// Structure to store one user-chosen reaction and its analysis results
#[derive(Debug, Clone)]
pub struct ReactionAnalyzer {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub reactant_coefficients: Option<Vec<i64>>,
    pub product_coefficients: Option<Vec<i64>>,
    pub report: Option<ReactionReport>,
}

impl ReactionAnalyzer {
    pub fn new() -> Self {
        Self {
            reactants: Vec::new(),
            products: Vec::new(),
            reactant_coefficients: None,
            product_coefficients: None,
            report: None,
        }
    }

    /// Build an analyzer from `"A + B"` side strings. The separator is
    /// exactly `" + "`; compound formulae themselves never contain spaces.
    pub fn from_strings(reactants: &str, products: &str) -> Self {
        let mut analyzer = Self::new();
        analyzer.reactants = reactants.split(" + ").map(|s| s.to_string()).collect();
        analyzer.products = products.split(" + ").map(|s| s.to_string()).collect();
        analyzer
    }

    pub fn set_reaction(&mut self, reactants: Vec<String>, products: Vec<String>) {
        self.reactants = reactants;
        self.products = products;
        self.reactant_coefficients = None;
        self.product_coefficients = None;
        self.report = None;
    }

    /// Balance the stored reaction and keep the coefficients
    pub fn balance_reaction(&mut self) -> Result<(), BalanceError> {
        let (reactant_coefficients, product_coefficients) =
            balance(&self.reactants, &self.products)?;
        self.reactant_coefficients = Some(reactant_coefficients);
        self.product_coefficients = Some(product_coefficients);
        Ok(())
    }

    /// Render the balanced equation, if the reaction has been balanced.
    /// Coefficients above 1 are prefixed to the formula, 1 is left implicit.
    pub fn balanced_equation(&self) -> Option<String> {
        match (&self.reactant_coefficients, &self.product_coefficients) {
            (Some(r), Some(p)) => Some(format!(
                "{} → {}",
                render_side(&self.reactants, r),
                render_side(&self.products, p)
            )),
            _ => None,
        }
    }

    /// Balance the reaction and collect molar masses and oxidation states of
    /// every compound into a [`ReactionReport`]. On any failure nothing is
    /// stored, there are no half-filled reports.
    pub fn analyze(&mut self) -> Result<(), AnalyzeError> {
        let (reactant_coefficients, product_coefficients) =
            balance(&self.reactants, &self.products)?;
        let balanced_equation = format!(
            "{} → {}",
            render_side(&self.reactants, &reactant_coefficients),
            render_side(&self.products, &product_coefficients)
        );

        let mut molar_masses = HashMap::new();
        let mut states = HashMap::new();
        for compound in self.reactants.iter().chain(self.products.iter()) {
            molar_masses.insert(compound.clone(), molar_mass(compound)?);
            states.insert(compound.clone(), oxidation_states(compound)?);
        }

        info!("reaction analyzed: {}", balanced_equation);
        self.report = Some(ReactionReport {
            balanced_equation,
            reactant_coefficients: reactant_coefficients.clone(),
            product_coefficients: product_coefficients.clone(),
            molar_masses,
            oxidation_states: states,
        });
        self.reactant_coefficients = Some(reactant_coefficients);
        self.product_coefficients = Some(product_coefficients);
        Ok(())
    }

    /// Analysis report as pretty-printed JSON, `"null"` before analyze() ran
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.report)
    }

    /// Print the report as a table to stdout
    pub fn pretty_print_report(&self) {
        if let Some(report) = &self.report {
            println!("{}", report.balanced_equation);
            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("compound"),
                Cell::new("coefficient"),
                Cell::new("molar mass, g/mol"),
                Cell::new("oxidation states"),
            ]));
            let sides = [
                (&self.reactants, &report.reactant_coefficients),
                (&self.products, &report.product_coefficients),
            ];
            for (compounds, coefficients) in sides {
                for (compound, coefficient) in compounds.iter().zip(coefficients.iter()) {
                    let mass = report
                        .molar_masses
                        .get(compound)
                        .map(|m| format!("{:.3}", m))
                        .unwrap_or_default();
                    let states = report
                        .oxidation_states
                        .get(compound)
                        .map(|s| format_states(s))
                        .unwrap_or_default();
                    table.add_row(Row::new(vec![
                        Cell::new(compound),
                        Cell::new(&coefficient.to_string()),
                        Cell::new(&mass),
                        Cell::new(&states),
                    ]));
                }
            }
            table.printstd();
        } else {
            println!("ReactionAnalyzer::pretty_print_report: no report, run analyze() first");
        }
    }
}

fn render_side(compounds: &[String], coefficients: &[i64]) -> String {
    compounds
        .iter()
        .zip(coefficients.iter())
        .map(|(compound, &coefficient)| {
            if coefficient > 1 {
                format!("{}{}", coefficient, compound)
            } else {
                compound.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn format_states(states: &HashMap<String, i32>) -> String {
    let mut entries: Vec<(&String, &i32)> = states.iter().collect();
    entries.sort();
    entries
        .iter()
        .map(|(element, state)| format!("{}:{:+}", element, state))
        .collect::<Vec<_>>()
        .join(", ")
}
