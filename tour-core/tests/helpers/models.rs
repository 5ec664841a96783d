use crate::models::{Coordinate, Distance, DistanceMatrix};

/// Returns corners of a square with the given side and its center, starting from the origin.
pub fn create_square_with_center(side: Coordinate) -> Vec<(Coordinate, Coordinate)> {
    vec![(0, 0), (side, 0), (side, side), (0, side), (side / 2, side / 2)]
}

/// Returns points placed on a line with the given step.
pub fn create_line(size: usize, step: Coordinate) -> Vec<(Coordinate, Coordinate)> {
    (0..size).map(|idx| (idx as Coordinate * step, 0)).collect()
}

pub fn create_euclidean_matrix(points: &[(Coordinate, Coordinate)]) -> DistanceMatrix {
    let values = points
        .iter()
        .flat_map(|&(x1, y1)| {
            points.iter().map(move |&(x2, y2)| {
                let (dx, dy) = ((x1 - x2) as f64, (y1 - y2) as f64);
                (dx * dx + dy * dy).sqrt().round() as Distance
            })
        })
        .collect();

    DistanceMatrix::new(points.len(), values).expect("cannot create matrix")
}

pub fn create_matrix_from_rows(rows: Vec<Vec<Distance>>) -> DistanceMatrix {
    let size = rows.len();

    DistanceMatrix::new(size, rows.into_iter().flatten().collect()).expect("cannot create matrix")
}
