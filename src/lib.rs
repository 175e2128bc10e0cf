//! Genetic algorithm solver for the symmetric Euclidean Traveling Salesman
//! Problem.
//!
//! Given city coordinates, evolves a population of candidate tours toward a
//! short closed round trip:
//!
//! - **Distance model** ([`distance`]): Euclidean legs, closed tour length,
//!   and a precomputed distance matrix.
//! - **Genetic algorithm** ([`ga`]): random initial permutations, ranking by
//!   tour length, roulette selection, Partially Mapped Crossover (PMX),
//!   swap mutation, and elitist generational replacement.
//!
//! The result is a heuristic: no optimality guarantee is made. Under a fixed
//! seed a run is fully reproducible.
//!
//! # Example
//!
//! ```
//! use u_tsp_ga::distance::CoordinateTable;
//! use u_tsp_ga::ga::{GaConfig, GaRunner};
//!
//! let coords = CoordinateTable::from_xy(&[
//!     (0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 3.0),
//! ]);
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&coords, &config)?;
//! assert_eq!(result.best_tour.len(), 5);
//! # Ok::<(), u_tsp_ga::TspError>(())
//! ```
//!
//! City loading and result printing are left to the caller.

pub mod distance;
pub mod error;
pub mod ga;

pub use error::{Result, TspError};
