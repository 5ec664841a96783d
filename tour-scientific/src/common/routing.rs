#[cfg(test)]
#[path = "../../tests/unit/common/routing_test.rs"]
mod routing_test;

use tour_core::models::{Coordinate, Distance, DistanceMatrix, PointSet};
use tour_core::utils::GenericResult;

/// Returns euclidean distance between two points rounded to the nearest integer.
pub fn euclidean_distance(from: (Coordinate, Coordinate), to: (Coordinate, Coordinate)) -> Distance {
    let (dx, dy) = (from.0 as f64 - to.0 as f64, from.1 as f64 - to.1 as f64);

    (dx * dx + dy * dy).sqrt().round() as Distance
}

/// Creates a symmetric matrix of rounded euclidean distances with zero diagonal. Every distance
/// is calculated once for an unordered pair of points.
pub fn create_euclidean_matrix(points: &PointSet) -> GenericResult<DistanceMatrix> {
    let size = points.len();
    let points = points.iter().collect::<Vec<_>>();
    let mut values = vec![0; size * size];

    for i in 0..size {
        for j in (i + 1)..size {
            let distance = euclidean_distance(points[i], points[j]);
            values[i * size + j] = distance;
            values[j * size + i] = distance;
        }
    }

    DistanceMatrix::new(size, values)
}
