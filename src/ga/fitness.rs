//! Fitness evaluation and ranking.
//!
//! Fitness is the reciprocal of tour length. Lengths are computed once per
//! generation into a [`RankedPopulation`]; ranking and every roulette draw
//! of that generation reuse them instead of re-measuring each tour.

use super::types::{Population, Tour};
use crate::distance::TourMetric;
use crate::error::{Result, TspError};

/// A population sorted best-first together with its tour lengths.
///
/// `lengths()[i]` is the length of `tours()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPopulation {
    tours: Population,
    lengths: Vec<f64>,
}

impl RankedPopulation {
    /// Tours in ascending length order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Lengths aligned with [`tours`](Self::tours).
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns true if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// The shortest tour and its length, or `None` if empty.
    pub fn best(&self) -> Option<(&Tour, f64)> {
        self.tours.first().map(|t| (t, self.lengths[0]))
    }

    /// Roulette probabilities in ranked order.
    ///
    /// # Errors
    /// [`TspError::DegenerateFitness`] if any length is zero or not finite;
    /// the index refers to the ranked order.
    pub fn selection_probabilities(&self) -> Result<Vec<f64>> {
        probabilities_from_lengths(&self.lengths)
    }

    /// Consumes the ranking, returning the sorted tours.
    pub fn into_tours(self) -> Population {
        self.tours
    }
}

/// Length of every tour, in population order.
///
/// # Errors
/// [`TspError::InvalidTour`] for the first invalid tour.
pub fn evaluate<M: TourMetric>(population: &[Tour], metric: &M) -> Result<Vec<f64>> {
    population.iter().map(|t| metric.tour_length(t)).collect()
}

/// Sorts `population` ascending by tour length (shortest first).
///
/// The sort is stable: tours of equal length keep their relative order,
/// which keeps runs reproducible under a fixed seed.
///
/// # Errors
/// [`TspError::InvalidTour`] if any tour is not a valid permutation.
pub fn rank<M: TourMetric>(population: Population, metric: &M) -> Result<RankedPopulation> {
    let lengths = evaluate(&population, metric)?;
    Ok(rank_evaluated(population, lengths))
}

/// Stable-sorts an already evaluated population.
///
/// # Panics
/// Panics if `population` and `lengths` differ in length.
pub fn rank_evaluated(population: Population, lengths: Vec<f64>) -> RankedPopulation {
    assert_eq!(
        population.len(),
        lengths.len(),
        "every tour needs exactly one length"
    );
    let mut paired: Vec<(Tour, f64)> = population.into_iter().zip(lengths).collect();
    // slice::sort_by is stable
    paired.sort_by(|a, b| a.1.total_cmp(&b.1));
    let (tours, lengths) = paired.into_iter().unzip();
    RankedPopulation { tours, lengths }
}

/// Roulette probabilities for `population`: `(1/len_i) / Σ(1/len_j)`.
///
/// # Errors
/// [`TspError::InvalidTour`] for an invalid tour, or
/// [`TspError::DegenerateFitness`] for a zero or non-finite length.
pub fn selection_probabilities<M: TourMetric>(
    population: &[Tour],
    metric: &M,
) -> Result<Vec<f64>> {
    probabilities_from_lengths(&evaluate(population, metric)?)
}

/// Normalized reciprocal-length weights.
///
/// Weights are taken relative to the shortest length (`min / len_i`), which
/// gives the same proportions as `1 / len_i` but stays finite for tiny
/// positive lengths.
///
/// # Errors
/// [`TspError::DegenerateFitness`] naming the first length that is zero or
/// not finite.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::ga::fitness::probabilities_from_lengths;
///
/// let p = probabilities_from_lengths(&[2.0, 4.0]).unwrap();
/// assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
/// assert!((p[1] - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn probabilities_from_lengths(lengths: &[f64]) -> Result<Vec<f64>> {
    if let Some(index) = lengths.iter().position(|&len| len == 0.0 || !len.is_finite()) {
        return Err(TspError::DegenerateFitness { index });
    }
    let shortest = lengths.iter().copied().fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = lengths.iter().map(|&len| shortest / len).collect();
    let total: f64 = weights.iter().sum();
    Ok(weights.into_iter().map(|w| w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CoordinateTable;

    fn unit_square() -> CoordinateTable {
        CoordinateTable::from_xy(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    #[test]
    fn test_rank_sorts_ascending() {
        let coords = unit_square();
        let pop = vec![vec![0, 2, 1, 3], vec![0, 1, 2, 3], vec![1, 3, 2, 0]];
        let ranked = rank(pop, &coords).unwrap();

        assert_eq!(ranked.tours()[0], vec![0, 1, 2, 3]);
        for w in ranked.lengths().windows(2) {
            assert!(w[0] <= w[1]);
        }
        let (best, len) = ranked.best().unwrap();
        assert_eq!(best, &vec![0, 1, 2, 3]);
        assert!((len - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let coords = unit_square();
        // all three are the perimeter, listed in a fixed order
        let pop = vec![vec![1, 2, 3, 0], vec![0, 1, 2, 3], vec![3, 2, 1, 0]];
        let ranked = rank(pop.clone(), &coords).unwrap();
        assert_eq!(ranked.tours(), pop.as_slice());
    }

    #[test]
    fn test_rank_evaluated_keeps_pairs() {
        let pop = vec![vec![9], vec![8], vec![7]];
        let ranked = rank_evaluated(pop, vec![3.0, 1.0, 2.0]);
        let expected: Population = vec![vec![8], vec![7], vec![9]];
        assert_eq!(ranked.tours(), expected.as_slice());
        assert_eq!(ranked.lengths(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rank_rejects_invalid_tour() {
        let coords = unit_square();
        let pop = vec![vec![0, 1, 2, 3], vec![0, 1, 2, 2]];
        assert!(matches!(
            rank(pop, &coords),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_probabilities_two_thirds_one_third() {
        let p = probabilities_from_lengths(&[2.0, 4.0]).unwrap();
        assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((p[1] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let coords = unit_square();
        let pop = vec![vec![0, 2, 1, 3], vec![0, 1, 2, 3], vec![1, 3, 0, 2]];
        let p = selection_probabilities(&pop, &coords).unwrap();
        assert_eq!(p.len(), 3);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        // shorter tour, higher probability
        assert!(p[1] > p[0]);
    }

    #[test]
    fn test_zero_length_is_degenerate() {
        // every city at the same spot
        let coords = CoordinateTable::from_xy(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        let pop = vec![vec![0, 1, 2]];
        assert_eq!(
            selection_probabilities(&pop, &coords),
            Err(TspError::DegenerateFitness { index: 0 })
        );
    }

    #[test]
    fn test_tiny_lengths_keep_proportions() {
        let p = probabilities_from_lengths(&[1e-310, 2e-310, 4.0]).unwrap();
        assert!(p.iter().all(|x| x.is_finite()), "got {p:?}");
        assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((p[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!(p[2] < 1e-300);
    }

    #[test]
    fn test_tiny_lengths_select_shortest() {
        use crate::ga::selection::select_index;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let p = probabilities_from_lengths(&[1e-310, 2e-310, 4.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 3];
        for _ in 0..1000 {
            counts[select_index(&p, &mut rng)] += 1;
        }
        assert_eq!(counts[2], 0, "longest tour must not dominate: {counts:?}");
        assert!(counts[0] > counts[1], "got {counts:?}");
    }

    #[test]
    fn test_infinite_length_is_degenerate() {
        assert_eq!(
            probabilities_from_lengths(&[1.0, f64::INFINITY]),
            Err(TspError::DegenerateFitness { index: 1 })
        );
        assert!(probabilities_from_lengths(&[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_ranked_probabilities_follow_ranked_order() {
        let ranked = rank_evaluated(vec![vec![0], vec![1]], vec![4.0, 2.0]);
        let p = ranked.selection_probabilities().unwrap();
        assert!((p[0] - 2.0 / 3.0).abs() < 1e-12);
    }
}
