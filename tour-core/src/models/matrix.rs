#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{GenericError, GenericResult};

/// Specifies a distance (or any other arc cost) between two nodes.
pub type Distance = i64;

/// Specifies a coordinate value of a point.
pub type Coordinate = i64;

/// A square matrix of non-negative integer distances between problem nodes.
///
/// Values are stored flatten in row-major order. The matrix is immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Distance>,
}

impl DistanceMatrix {
    /// Creates a new instance of `DistanceMatrix` from row-major values.
    pub fn new(size: usize, values: Vec<Distance>) -> GenericResult<Self> {
        if size == 0 {
            return Err("distance matrix cannot be empty".into());
        }

        if size * size != values.len() {
            return Err(GenericError::from(format!(
                "non-square flatten matrix: expected {} items for size {size}, got {}",
                size * size,
                values.len()
            )));
        }

        if let Some(position) = values.iter().position(|&value| value < 0) {
            return Err(GenericError::from(format!(
                "negative distance {} at [{}][{}]",
                values[position],
                position / size,
                position % size
            )));
        }

        Ok(Self { size, values })
    }

    /// Returns amount of rows (and columns) in the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.values[from * self.size + to]
    }

    /// Returns a row of distances from the given node.
    pub fn row(&self, from: usize) -> &[Distance] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Checks whether the matrix is symmetric and has zero diagonal.
    pub fn is_symmetric(&self) -> bool {
        self.find_asymmetry().is_none()
    }

    /// Returns the first cell `(i, j)`, in row-major order, which has a non-zero diagonal value or
    /// differs from its mirrored cell `(j, i)`.
    pub fn find_asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.size).find_map(|i| {
            if self.distance(i, i) != 0 {
                return Some((i, i));
            }

            (i + 1..self.size).find(|&j| self.distance(i, j) != self.distance(j, i)).map(|j| (i, j))
        })
    }

    /// Returns total distance of a closed tour: consecutive nodes are summed together with the
    /// closing edge from the last node back to the first one.
    pub fn tour_distance(&self, tour: &[usize]) -> Distance {
        let closing = tour.last().zip(tour.first()).map_or(0, |(&last, &first)| self.distance(last, first));

        tour.windows(2).map(|pair| self.distance(pair[0], pair[1])).sum::<Distance>() + closing
    }
}

/// A list of 2D points, index-aligned with the rows of the distance matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<(Coordinate, Coordinate)>,
}

impl PointSet {
    /// Creates a new instance of `PointSet`.
    pub fn new(points: Vec<(Coordinate, Coordinate)>) -> Self {
        Self { points }
    }

    /// Adds a point to the end of the set.
    pub fn push(&mut self, point: (Coordinate, Coordinate)) {
        self.points.push(point);
    }

    /// Returns a point by node index.
    pub fn get(&self, index: usize) -> Option<(Coordinate, Coordinate)> {
        self.points.get(index).copied()
    }

    /// Returns amount of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there is no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over points.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.points.iter().copied()
    }

    /// Returns a bounding box as `((min_x, min_y), (max_x, max_y))`.
    pub fn bounds(&self) -> Option<((Coordinate, Coordinate), (Coordinate, Coordinate))> {
        self.points.iter().fold(None, |acc, &(x, y)| match acc {
            None => Some(((x, y), (x, y))),
            Some(((min_x, min_y), (max_x, max_y))) => {
                Some(((min_x.min(x), min_y.min(y)), (max_x.max(x), max_y.max(y))))
            }
        })
    }
}

/// A maximum allowed route value declared by the problem data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteBound {
    /// Maximum route value.
    pub max_route: Distance,
}

impl RouteBound {
    /// Creates a new instance of `RouteBound`.
    pub fn new(max_route: Distance) -> Self {
        Self { max_route }
    }

    /// Returns a route capacity limited by the given coefficient: `floor(max_route * coefficient)`.
    pub fn capacity(&self, upper_limit_coefficient: f64) -> Distance {
        (self.max_route as f64 * upper_limit_coefficient).floor() as Distance
    }

    /// Returns a global span cost coefficient derived from the route capacity.
    pub fn span_cost_coefficient(&self, upper_limit_coefficient: f64) -> Distance {
        self.capacity(upper_limit_coefficient) / 10
    }
}
