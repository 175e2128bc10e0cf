//! GA generational loop.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization → rank → elitist retention → roulette/PMX/swap breeding →
//! replace → repeat.

use super::config::GaConfig;
use super::fitness::{rank, RankedPopulation};
use super::operators::{pmx_crossover, swap_mutation};
use super::population::initial_population;
use super::selection::select_one;
use super::types::{Population, Tour};
use crate::distance::{CoordinateTable, DistanceMatrix};
use crate::error::{Result, TspError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Shortest tour in the final population.
    pub best_tour: Tour,

    /// Round-trip length of `best_tour`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best length of the initial population, then after each generation.
    pub length_history: Vec<f64>,
}

/// Executes the TSP genetic algorithm.
///
/// # Usage
///
/// ```
/// use u_tsp_ga::distance::CoordinateTable;
/// use u_tsp_ga::ga::{GaConfig, GaRunner};
///
/// let coords = CoordinateTable::from_xy(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&coords, &config).unwrap();
/// assert!((result.best_length - 4.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over `coords`.
    ///
    /// # Errors
    /// [`TspError::InvalidConfiguration`] for an invalid config or fewer than
    /// two cities; [`TspError::DegenerateFitness`] if a zero-length tour
    /// reaches roulette selection; [`TspError::InvalidTour`] on an operator
    /// defect.
    pub fn run(coords: &CoordinateTable, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(coords, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best tour so far.
    pub fn run_with_cancel(
        coords: &CoordinateTable,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        let num_cities = coords.len();
        if num_cities < 2 {
            return Err(TspError::InvalidConfiguration(format!(
                "at least 2 cities are required, got {num_cities}"
            )));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let matrix = DistanceMatrix::from_table(coords);

        info!(
            cities = num_cities,
            population_size = config.population_size,
            max_generations = config.max_generations,
            mutation_rate = config.mutation_rate,
            seed,
            "starting GA run"
        );

        // 1. Initialize and rank
        let population = initial_population(config.population_size, num_cities, &mut rng)?;
        let mut ranked = rank(population, &matrix)?;

        let mut length_history = Vec::with_capacity(config.max_generations + 1);
        length_history.push(best_of(&ranked)?.1);

        let mut generations = 0;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    warn!(generation = gen, "GA run cancelled");
                    break;
                }
            }

            let next = next_generation(&ranked, config, &mut rng)?;
            ranked = rank(next, &matrix)?;
            generations = gen + 1;

            let best_length = best_of(&ranked)?.1;
            length_history.push(best_length);
            debug!(generation = generations, best_length, "generation complete");
        }

        let (best_tour, best_length) = best_of(&ranked)?;
        let best_tour = best_tour.clone();

        info!(best_length, generations, cancelled, "GA run finished");

        Ok(GaResult {
            best_tour,
            best_length,
            generations,
            cancelled,
            length_history,
        })
    }
}

/// Builds the next population from a ranked one.
///
/// The best half is kept unchanged. Parents are drawn by roulette from the
/// whole ranked population, including the half that was not retained.
fn next_generation<R: Rng>(
    ranked: &RankedPopulation,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population> {
    let target = config.population_size;
    let probabilities = ranked.selection_probabilities()?;
    let parents = ranked.tours();

    let mut next: Population = Vec::with_capacity(target);
    next.extend_from_slice(&parents[..config.elite_count()]);

    while next.len() < target {
        let p1 = select_one(parents, &probabilities, rng);
        let p2 = select_one(parents, &probabilities, rng);
        let (mut c1, mut c2) = pmx_crossover(p1, p2, rng)?;

        swap_mutation(&mut c1, config.mutation_rate, rng);
        next.push(c1);

        // second child only if it still fits
        if next.len() < target {
            swap_mutation(&mut c2, config.mutation_rate, rng);
            next.push(c2);
        }
    }

    Ok(next)
}

fn best_of(ranked: &RankedPopulation) -> Result<(&Tour, f64)> {
    ranked
        .best()
        .ok_or_else(|| TspError::InvalidConfiguration("population is empty".into()))
}

// ============================================================================
// Tests
// ============================================================================
