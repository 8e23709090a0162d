//! Molecule-counting toy model of a reverse osmosis stage: a shuffled tank
//! of water and salt "molecules" is pushed through an ideal membrane that
//! passes water and holds salt back.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Molecule {
    Water,
    Salt,
}

impl Molecule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Molecule::Water => "H2O",
            Molecule::Salt => "NaCl",
        }
    }
}

/// Mix `n_water` water and `n_salt` salt molecules into one shuffled tank
pub fn generate_seawater(n_water: usize, n_salt: usize, rng: &mut impl Rng) -> Vec<Molecule> {
    let mut tank = Vec::with_capacity(n_water + n_salt);
    tank.extend(std::iter::repeat_n(Molecule::Water, n_water));
    tank.extend(std::iter::repeat_n(Molecule::Salt, n_salt));
    tank.shuffle(rng);
    tank
}

/// One ideal membrane pass: water ends up in the permeate, salt in the brine
pub fn desalinate(seawater: &[Molecule]) -> (Vec<Molecule>, Vec<Molecule>) {
    seawater
        .iter()
        .copied()
        .partition(|molecule| *molecule == Molecule::Water)
}

/// Share of water molecules in the tank, percent. An empty tank counts as 0.
pub fn freshwater_percentage(seawater: &[Molecule]) -> f64 {
    if seawater.is_empty() {
        return 0.0;
    }
    let water = seawater
        .iter()
        .filter(|molecule| **molecule == Molecule::Water)
        .count();
    water as f64 / seawater.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_seawater_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let tank = generate_seawater(90, 10, &mut rng);
        assert_eq!(tank.len(), 100);
        let salt = tank.iter().filter(|m| **m == Molecule::Salt).count();
        assert_eq!(salt, 10);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_seawater(50, 50, &mut StdRng::seed_from_u64(42));
        let second = generate_seawater(50, 50, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_desalination_partitions_the_tank() {
        let mut rng = StdRng::seed_from_u64(1);
        let tank = generate_seawater(75, 25, &mut rng);
        let (permeate, brine) = desalinate(&tank);
        assert_eq!(permeate.len(), 75);
        assert_eq!(brine.len(), 25);
        assert!(permeate.iter().all(|m| *m == Molecule::Water));
        assert!(brine.iter().all(|m| *m == Molecule::Salt));
        assert_relative_eq!(freshwater_percentage(&permeate), 100.0, epsilon = 1e-12);
        assert_relative_eq!(freshwater_percentage(&brine), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_freshwater_percentage() {
        let mut rng = StdRng::seed_from_u64(3);
        let tank = generate_seawater(90, 10, &mut rng);
        assert_relative_eq!(freshwater_percentage(&tank), 90.0, epsilon = 1e-12);
        assert_eq!(freshwater_percentage(&[]), 0.0);
    }

    #[test]
    fn test_molecule_formulae() {
        assert_eq!(Molecule::Water.as_str(), "H2O");
        assert_eq!(Molecule::Salt.as_str(), "NaCl");
    }
}
