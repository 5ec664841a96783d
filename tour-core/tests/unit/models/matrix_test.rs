use super::*;
use crate::helpers::models::*;

parameterized_test! {can_validate_matrix_values, (size, values, expected_error), {
    let result = DistanceMatrix::new(size, values);

    assert_eq!(result.map(|_| ()).map_err(|err| err.to_string()), Err(expected_error.to_string()));
}}

can_validate_matrix_values! {
    case01_empty: (0, vec![], "distance matrix cannot be empty"),
    case02_not_square: (2, vec![0, 1, 1], "non-square flatten matrix: expected 4 items for size 2, got 3"),
    case03_negative: (2, vec![0, 1, -1, 0], "negative distance -1 at [1][0]"),
}

#[test]
fn can_access_matrix_values() {
    let matrix = create_matrix_from_rows(vec![vec![0, 1, 2], vec![3, 0, 4], vec![5, 6, 0]]);

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.distance(1, 2), 4);
    assert_eq!(matrix.distance(2, 0), 5);
    assert_eq!(matrix.row(1), &[3, 0, 4]);
    assert!(!matrix.is_symmetric());
}

#[test]
fn can_detect_symmetric_matrix() {
    let matrix = create_euclidean_matrix(&create_square_with_center(10));

    assert!(matrix.is_symmetric());
    assert_eq!(matrix.distance(0, 2), 14);
    assert_eq!(matrix.distance(4, 3), 7);
}

#[test]
fn can_detect_non_zero_diagonal() {
    let matrix = create_matrix_from_rows(vec![vec![1, 2], vec![2, 0]]);

    assert!(!matrix.is_symmetric());
}

parameterized_test! {can_find_first_asymmetric_cell, (rows, expected), {
    let matrix = create_matrix_from_rows(rows);

    assert_eq!(matrix.find_asymmetry(), expected);
}}

can_find_first_asymmetric_cell! {
    case01_symmetric: (vec![vec![0, 2, 3], vec![2, 0, 4], vec![3, 4, 0]], None),
    case02_diagonal_first: (vec![vec![1, 2, 3], vec![5, 0, 4], vec![3, 4, 0]], Some((0, 0))),
    case03_mirrored_cell: (vec![vec![0, 2, 3], vec![2, 0, 4], vec![3, 5, 0]], Some((1, 2))),
    case04_late_diagonal: (vec![vec![0, 2, 3], vec![2, 0, 4], vec![3, 4, 6]], Some((2, 2))),
}

parameterized_test! {can_calculate_tour_distance, (tour, expected), {
    let matrix = create_euclidean_matrix(&create_square_with_center(10));

    assert_eq!(matrix.tour_distance(&tour), expected);
}}

can_calculate_tour_distance! {
    case01_empty: (vec![], 0),
    case02_single: (vec![0], 0),
    case03_edge_back_and_forth: (vec![0, 1], 20),
    case04_optimal: (vec![0, 1, 4, 2, 3], 44),
    case05_perimeter_with_center: (vec![0, 1, 2, 3, 4], 44),
}

#[test]
fn can_calculate_point_set_bounds() {
    let mut points = PointSet::default();
    assert!(points.is_empty());
    assert_eq!(points.bounds(), None);

    points.push((3, -1));
    points.push((-2, 5));
    points.push((0, 0));

    assert_eq!(points.len(), 3);
    assert_eq!(points.get(1), Some((-2, 5)));
    assert_eq!(points.get(3), None);
    assert_eq!(points.bounds(), Some(((-2, -1), (3, 5))));
}

parameterized_test! {can_derive_route_limits, (max_route, coefficient, expected_capacity, expected_span), {
    let bound = RouteBound::new(max_route);

    assert_eq!(bound.capacity(coefficient), expected_capacity);
    assert_eq!(bound.span_cost_coefficient(coefficient), expected_span);
}}

can_derive_route_limits! {
    case01_half: (100, 0.5, 50, 5),
    case02_default_coefficient: (1000, 0.8, 800, 80),
    case03_floor: (7, 0.8, 5, 0),
    case04_full: (25, 1., 25, 2),
}
