//! Permutation-preserving genetic operators.
//!
//! # Crossover
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), copies a segment
//!   from one parent and repairs the rest through the parent-to-parent
//!   mapping so no city is duplicated or lost
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-gene swap with a random partner, O(n)
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::Tour;
use crate::distance::validate_tour;
use crate::error::{Result, TspError};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) with random cut points.
///
/// Draws two distinct cut points `c1 < c2` in `0..n` and delegates to
/// [`pmx_crossover_at`]. For `n < 2` the parents are returned unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
/// [`TspError::InvalidTour`] if the parents differ in length, are not
/// permutations of `0..n`, or (a defect) a child fails validation.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Result<(Tour, Tour)> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(TspError::InvalidTour(format!(
            "parents must have equal length, got {n} and {}",
            parent2.len()
        )));
    }
    if n < 2 {
        return Ok((parent1.to_vec(), parent2.to_vec()));
    }

    let (c1, c2) = random_cut_points(n, rng);
    pmx_crossover_at(parent1, parent2, c1, c2)
}

/// PMX with explicit cut points; the mapped segment is `[c1, c2)`.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Child1 copies parent1's segment, child2 copies parent2's
/// 2. Each gene of the other parent's segment not yet in the child is placed
///    by following the mapping chain until a free slot is reached
/// 3. Remaining slots take the other parent's gene at the same position
///
/// # Errors
/// [`TspError::InvalidConfiguration`] unless `c1 < c2 <= n`;
/// [`TspError::InvalidTour`] as for [`pmx_crossover`].
///
/// # Examples
///
/// ```
/// use u_tsp_ga::ga::operators::pmx_crossover_at;
///
/// let (c1, c2) = pmx_crossover_at(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 4).unwrap();
/// assert_eq!(c1, vec![4, 1, 2, 3, 0]);
/// assert_eq!(c2, vec![0, 3, 2, 1, 4]);
/// ```
pub fn pmx_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    c1: usize,
    c2: usize,
) -> Result<(Tour, Tour)> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(TspError::InvalidTour(format!(
            "parents must have equal length, got {n} and {}",
            parent2.len()
        )));
    }
    if c1 >= c2 || c2 > n {
        return Err(TspError::InvalidConfiguration(format!(
            "cut points must satisfy c1 < c2 <= {n}, got ({c1}, {c2})"
        )));
    }
    validate_tour(parent1, n)?;
    validate_tour(parent2, n)?;

    let child1 = pmx_build_child(parent1, parent2, c1, c2)?;
    let child2 = pmx_build_child(parent2, parent1, c1, c2)?;

    validate_tour(&child1, n)?;
    validate_tour(&child2, n)?;
    Ok((child1, child2))
}

/// Build one PMX child: copy `[c1, c2)` from `template`, map from `donor`.
///
/// Both parents must already be valid permutations of `0..n`.
fn pmx_build_child(template: &[usize], donor: &[usize], c1: usize, c2: usize) -> Result<Tour> {
    let n = template.len();

    let mut donor_pos = vec![0usize; n];
    for (pos, &city) in donor.iter().enumerate() {
        donor_pos[city] = pos;
    }

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    // Step 1: mapped segment
    for i in c1..c2 {
        child[i] = Some(template[i]);
        placed[template[i]] = true;
    }

    // Step 2: place the donor's segment genes through the mapping chain
    for i in c1..c2 {
        let gene = donor[i];
        if placed[gene] {
            continue;
        }
        let mut pos = i;
        let mut steps = 0;
        while child[pos].is_some() {
            // a valid pair of permutations terminates in < n hops; callers
            // validate both parents first, so this only trips on corrupt input
            if steps == n {
                return Err(TspError::InvalidTour(format!(
                    "PMX mapping chain for city {gene} did not terminate within {n} steps"
                )));
            }
            pos = donor_pos[template[pos]];
            steps += 1;
        }
        child[pos] = Some(gene);
        placed[gene] = true;
    }

    // Step 3: fill the rest from the donor
    Ok(child
        .into_iter()
        .zip(donor)
        .map(|(slot, &city)| slot.unwrap_or(city))
        .collect())
}

/// Two distinct cut points `c1 < c2`, uniform over pairs in `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "cut points need at least 2 positions");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation applied gene by gene.
///
/// Each position `i` is, with probability `rate`, swapped with a uniformly
/// drawn position `j` in `0..n` (`j == i` leaves the tour unchanged).
///
/// Mutates `tour` in place; the caller keeps ownership of the same tour.
/// The return value is the number of swaps drawn, self-swaps included.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) -> usize {
    let n = tour.len();
    let mut swaps = 0;
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
            swaps += 1;
        }
    }
    swaps
}

// ============================================================================
// Tests
// ============================================================================
