use super::*;
use crate::engine::reference::ReferenceEngine;
use crate::helpers::models::*;

fn create_problem(vehicle_count: usize) -> RoutingProblem {
    let matrix = Arc::new(create_euclidean_matrix(&create_square_with_center(10)));

    RoutingProblem::adapt(matrix, vehicle_count, &ReferenceEngine::default()).unwrap()
}

#[test]
fn can_adapt_matrix_with_default_depot() {
    let problem = create_problem(3);

    assert_eq!(problem.depot(), DEFAULT_DEPOT);
    assert_eq!(problem.vehicle_count(), 3);
    assert_eq!(problem.matrix().size(), 5);
    assert_eq!(problem.manager().index_count(), 5 + 2 * 3 - 1);
}

#[test]
fn can_translate_indices_for_distances() {
    let problem = create_problem(2);
    let manager = problem.manager();
    let callback = problem.create_transit_callback();

    let end = manager.end_index(1);
    let start = manager.start_index(1);

    assert_eq!(problem.distance_between(2, end), problem.matrix().distance(2, 0));
    assert_eq!(problem.distance_between(start, 4), 7);
    assert_eq!(callback(start, end), 0);
    (0..5).for_each(|from| {
        (0..5).for_each(|to| assert_eq!(callback(from, to), problem.matrix().distance(from, to)));
    });
}

parameterized_test! {can_validate_problem, (vehicle_count, depot), {
    let matrix = Arc::new(create_euclidean_matrix(&create_line(3, 1)));

    assert!(RoutingProblem::new(matrix, vehicle_count, depot, &ReferenceEngine::default()).is_err());
}}

can_validate_problem! {
    case01_no_vehicles: (0, 0),
    case02_depot_out_of_range: (1, 3),
}
