use super::*;
use crate::helpers::create_random_points;

parameterized_test! {can_calculate_euclidean_distance, (from, to, expected), {
    assert_eq!(euclidean_distance(from, to), expected);
    assert_eq!(euclidean_distance(to, from), expected);
}}

can_calculate_euclidean_distance! {
    case01_same: ((3, 4), (3, 4), 0),
    case02_triangle: ((0, 0), (3, 4), 5),
    case03_rounded_down: ((0, 0), (10, 10), 14),
    case04_rounded_up: ((0, 0), (5, 5), 7),
    case05_negative: ((-1, -1), (2, 3), 5),
    case06_large: ((0, 3_000_000_000), (4_000_000_000, 0), 5_000_000_000),
    case07_opposite_extremes: ((Coordinate::MAX, 0), (-Coordinate::MAX, 0), Distance::MAX),
    case08_diagonal_extremes: ((Coordinate::MIN, Coordinate::MIN), (Coordinate::MAX, Coordinate::MAX), Distance::MAX),
}

#[test]
fn can_create_symmetric_matrix_for_random_points() {
    (0..5).for_each(|seed| {
        let points = create_random_points(40, 1000, seed);

        let matrix = create_euclidean_matrix(&points).expect("cannot create matrix");

        assert_eq!(matrix.size(), 40);
        assert!(matrix.is_symmetric());
        (0..40).for_each(|i| {
            (0..40).for_each(|j| {
                let expected = euclidean_distance(points.get(i).unwrap(), points.get(j).unwrap());
                assert_eq!(matrix.distance(i, j), expected);
            })
        });
    });
}

#[test]
fn can_reject_empty_point_set() {
    assert!(create_euclidean_matrix(&PointSet::default()).is_err());
}
