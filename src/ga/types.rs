//! Solution representation.
//!
//! A [`Tour`] is an ordered visit sequence of city indices, a permutation of
//! `0..n` implicitly closed back to its first city. Fitness is never stored
//! on the tour; it is derived from the tour length when needed.

/// A candidate solution: a permutation of city indices.
pub type Tour = Vec<usize>;

/// An ordered collection of tours with a fixed size across generations.
pub type Population = Vec<Tour>;
