//! Random initial population.

use super::types::{Population, Tour};
use crate::error::{Result, TspError};
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random permutation of `0..num_cities` (Fisher–Yates).
pub fn random_tour<R: Rng>(num_cities: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..num_cities).collect();
    tour.shuffle(rng);
    tour
}

/// Creates `size` independent random tours over `num_cities` cities.
///
/// Individuals are not required to be distinct.
///
/// # Errors
/// [`TspError::InvalidConfiguration`] if `size < 1` or `num_cities < 2`.
pub fn initial_population<R: Rng>(
    size: usize,
    num_cities: usize,
    rng: &mut R,
) -> Result<Population> {
    if size < 1 {
        return Err(TspError::InvalidConfiguration(
            "population size must be at least 1".into(),
        ));
    }
    if num_cities < 2 {
        return Err(TspError::InvalidConfiguration(format!(
            "at least 2 cities are required, got {num_cities}"
        )));
    }
    Ok((0..size).map(|_| random_tour(num_cities, rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::validate_tour;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_shape_and_validity() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initial_population(30, 12, &mut rng).unwrap();
        assert_eq!(pop.len(), 30);
        for tour in &pop {
            validate_tour(tour, 12).unwrap();
        }
    }

    #[test]
    fn test_population_is_shuffled() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = initial_population(20, 10, &mut rng).unwrap();
        let identity: Tour = (0..10).collect();
        assert!(pop.iter().any(|t| *t != identity));
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = initial_population(10, 8, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = initial_population(10, 8, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_empty_population() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            initial_population(0, 5, &mut rng),
            Err(TspError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_single_city() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            initial_population(5, 1, &mut rng),
            Err(TspError::InvalidConfiguration(_))
        ));
    }
}
