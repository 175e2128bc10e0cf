//! Euclidean distance model.
//!
//! City coordinates are owned by a [`CoordinateTable`] and addressed by
//! index everywhere else; tours never copy coordinate data.
//!
//! Two [`TourMetric`] implementations are provided:
//!
//! - [`CoordinateTable`]: computes each leg on demand from coordinates
//! - [`DistanceMatrix`]: precomputed N×N leg table, O(1) per leg
//!
//! Both produce bit-identical tour lengths for the same table.

use crate::error::{Result, TspError};

/// A 2-D city position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance `sqrt((ax-bx)^2 + (ay-by)^2)`.
///
/// Computed with [`f64::hypot`], so squaring never overflows. Coordinates
/// must be finite and their pairwise differences must fit in an `f64`.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Anything that can price a leg between two cities.
///
/// The provided [`tour_length`](TourMetric::tour_length) validates the tour
/// and sums the closed loop: consecutive legs first, then the leg from the
/// last city back to the first.
pub trait TourMetric {
    /// Number of cities addressable by this metric.
    fn num_cities(&self) -> usize;

    /// Distance from city `from` to city `to`.
    ///
    /// Both indices must be `< num_cities()`.
    fn leg(&self, from: usize, to: usize) -> f64;

    /// Total round-trip length of `tour`.
    ///
    /// # Errors
    /// [`TspError::InvalidTour`] if `tour` is empty or not a permutation of
    /// `0..num_cities()`.
    fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        validate_tour(tour, self.num_cities())?;
        Ok(closed_length(self, tour))
    }
}

/// Sums the closed loop without validation. `tour` must be non-empty.
fn closed_length<M: TourMetric + ?Sized>(metric: &M, tour: &[usize]) -> f64 {
    let open: f64 = tour.windows(2).map(|w| metric.leg(w[0], w[1])).sum();
    open + metric.leg(tour[tour.len() - 1], tour[0])
}

/// Checks that `tour` is a permutation of `0..n`.
///
/// # Errors
/// [`TspError::InvalidTour`] describing the first violation found.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.is_empty() {
        return Err(TspError::InvalidTour("tour is empty".into()));
    }
    if tour.len() != n {
        return Err(TspError::InvalidTour(format!(
            "tour has {} cities, expected {n}",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &city) in tour.iter().enumerate() {
        if city >= n {
            return Err(TspError::InvalidTour(format!(
                "city {city} at position {pos} is out of range 0..{n}"
            )));
        }
        if seen[city] {
            return Err(TspError::InvalidTour(format!(
                "city {city} appears more than once (again at position {pos})"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Total round-trip length of `tour` over `coords`.
///
/// Convenience wrapper for [`TourMetric::tour_length`].
pub fn tour_length(tour: &[usize], coords: &CoordinateTable) -> Result<f64> {
    coords.tour_length(tour)
}

/// Immutable, index-addressed table of city coordinates.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::distance::{CoordinateTable, TourMetric};
///
/// let square = CoordinateTable::from_xy(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// assert_eq!(square.tour_length(&[0, 1, 2, 3]).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateTable {
    cities: Vec<Coordinate>,
}

impl CoordinateTable {
    /// Creates a table from coordinates; city `i` is `cities[i]`.
    pub fn new(cities: Vec<Coordinate>) -> Self {
        Self { cities }
    }

    /// Creates a table from `(x, y)` pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self {
            cities: points.iter().copied().map(Coordinate::from).collect(),
        }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the table has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Coordinate of city `index`, if present.
    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.cities.get(index).copied()
    }

    /// All coordinates in index order.
    pub fn cities(&self) -> &[Coordinate] {
        &self.cities
    }
}

impl TourMetric for CoordinateTable {
    fn num_cities(&self) -> usize {
        self.cities.len()
    }

    fn leg(&self, from: usize, to: usize) -> f64 {
        distance(self.cities[from], self.cities[to])
    }
}

/// Precomputed pairwise distances, stored row-major.
///
/// Building costs O(N²) once; afterwards every leg is a lookup, which
/// keeps per-generation evaluation at O(P·N).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    legs: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for every ordered pair of cities in `coords`.
    pub fn from_table(coords: &CoordinateTable) -> Self {
        let n = coords.len();
        let cities = coords.cities();
        let mut legs = Vec::with_capacity(n * n);
        for a in cities {
            for b in cities {
                legs.push(distance(*a, *b));
            }
        }
        Self { n, legs }
    }

    /// Lengths of every tour in `population`, in population order.
    ///
    /// # Errors
    /// [`TspError::InvalidTour`] for the first tour that is not a
    /// permutation of `0..n`.
    pub fn population_lengths(&self, population: &[Vec<usize>]) -> Result<Vec<f64>> {
        population.iter().map(|tour| self.tour_length(tour)).collect()
    }
}

impl TourMetric for DistanceMatrix {
    fn num_cities(&self) -> usize {
        self.n
    }

    fn leg(&self, from: usize, to: usize) -> f64 {
        self.legs[from * self.n + to]
    }
}
