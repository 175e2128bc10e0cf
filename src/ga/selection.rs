//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Probabilities come from [`fitness`](super::fitness); this module only
//! draws from them, so a single set of probabilities can serve every draw
//! of a generation.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use super::types::Tour;
use rand::Rng;

/// Draws an index from `0..probabilities.len()` with the given weights.
///
/// One uniform draw in `[0, 1)` is walked along the cumulative sum.
///
/// # Panics
/// Panics if `probabilities` is empty.
pub fn select_index<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    assert!(
        !probabilities.is_empty(),
        "cannot select from empty population"
    );
    let n = probabilities.len();
    if n == 1 {
        return 0;
    }

    let threshold: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Picks one parent from `population` by roulette.
///
/// The returned borrow cannot be mutated while the population is alive;
/// breeding reads parents and writes only to fresh children.
///
/// # Panics
/// Panics if `population` is empty or its size differs from
/// `probabilities`.
pub fn select_one<'a, R: Rng>(
    population: &'a [Tour],
    probabilities: &[f64],
    rng: &mut R,
) -> &'a Tour {
    assert_eq!(
        population.len(),
        probabilities.len(),
        "one probability per individual"
    );
    &population[select_index(probabilities, rng)]
}
