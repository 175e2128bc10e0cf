//! Genetic Algorithm for the symmetric Euclidean TSP.
//!
//! A tour is a permutation of city indices; the population evolves by
//! fitness-proportional selection, Partially Mapped Crossover, and per-gene
//! swap mutation, with the best half retained each generation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population size, generations, mutation rate, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best tour found with its length and history
//!
//! # Submodules
//!
//! - [`population`]: Random initial tours
//! - [`fitness`]: Length evaluation, stable ranking, roulette probabilities
//! - [`selection`]: Roulette wheel draws
//! - [`operators`]: PMX crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
pub mod fitness;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::RankedPopulation;
pub use runner::{GaResult, GaRunner};
pub use types::{Population, Tour};
