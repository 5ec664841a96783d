use super::*;
use crate::engine::IndexManager;
use crate::engine::reference::context::create_test_context;
use crate::helpers::models::*;

parameterized_test! {can_improve_routes, (points, routes, expected_cost), {
    can_improve_routes_impl(points, routes, expected_cost);
}}

can_improve_routes! {
    case01_relocate_on_square: (create_square_with_center(10), vec![vec![1, 3, 2, 4]], 44),
    case02_relocate_on_line: (create_line(4, 10), vec![vec![3, 1, 2]], 60),
    case03_reverse_on_line: (create_line(6, 10), vec![vec![1, 4, 3, 2, 5]], 100),
}

fn can_improve_routes_impl(points: Vec<(i64, i64)>, routes: Routes, expected_cost: Distance) {
    let context = create_test_context(create_euclidean_matrix(&points), 1, None);
    let neighbours = context.create_neighbours(32);
    let original_cost = context.objective(&routes);
    let mut routes = routes;

    let moves = descend(&context, &mut routes, context.arc_cost.as_ref(), &neighbours, None);

    assert!(moves > 0);
    assert!(original_cost > expected_cost);
    assert_eq!(context.objective(&routes), expected_cost);
}

#[test]
fn can_keep_local_optimum_untouched() {
    let context = create_test_context(create_euclidean_matrix(&create_square_with_center(10)), 1, None);
    let neighbours = context.create_neighbours(32);
    let mut routes = vec![vec![1, 4, 2, 3]];

    let moves = descend(&context, &mut routes, context.arc_cost.as_ref(), &neighbours, None);

    assert_eq!(moves, 0);
    assert_eq!(routes, vec![vec![1, 4, 2, 3]]);
}

#[test]
fn can_respect_dimension_bounds() {
    // two customers on opposite sides: serving both by one vehicle costs 40
    let points = vec![(0, 0), (10, 0), (-10, 0)];
    let context = create_test_context(create_euclidean_matrix(&points), 2, Some(20));
    let neighbours = context.create_neighbours(32);
    let mut routes = vec![vec![1], vec![2]];

    descend(&context, &mut routes, context.arc_cost.as_ref(), &neighbours, None);

    assert_eq!(routes, vec![vec![1], vec![2]]);
}

#[test]
fn can_use_custom_arc_cost() {
    let context = create_test_context(create_euclidean_matrix(&create_line(4, 10)), 1, None);
    let neighbours = context.create_neighbours(32);
    // penalizes any arc which leaves the last node except to the route end
    let manager = context.manager.clone();
    let cost = |from: RouteIndex, to: RouteIndex| {
        let penalty = if manager.index_to_node(from) == 3 && to != manager.end_index(0) { 1000 } else { 0 };
        context.arc(from, to) + penalty
    };
    let mut routes = vec![vec![3, 2, 1]];

    descend(&context, &mut routes, &cost, &neighbours, None);

    assert_eq!(routes, vec![vec![1, 2, 3]]);
}
