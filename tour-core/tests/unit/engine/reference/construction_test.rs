use super::*;
use crate::engine::reference::context::create_test_context;
use crate::helpers::models::*;

fn create_far_customers() -> Vec<(i64, i64)> {
    vec![(0, 0), (10, 0), (0, 10), (-10, 0)]
}

fn get_cost(context: &SearchContext, routes: &Routes) -> Distance {
    context.objective(routes)
}

#[test]
fn can_build_path_cheapest_arc_tour() {
    let context = create_test_context(create_euclidean_matrix(&create_square_with_center(10)), 1, None);

    let routes = path_cheapest_arc(&context).expect("no solution");

    assert_eq!(routes, vec![vec![4, 1, 2, 3]]);
    assert_eq!(get_cost(&context, &routes), 44);
}

#[test]
fn can_build_global_cheapest_arc_tour() {
    let context = create_test_context(create_euclidean_matrix(&create_square_with_center(10)), 1, None);

    let routes = global_cheapest_arc(&context).expect("no solution");

    assert_eq!(routes, vec![vec![1, 4, 2, 3]]);
    assert_eq!(get_cost(&context, &routes), 44);
}

#[test]
fn can_keep_all_nodes_once_in_global_cheapest_arc() {
    let context = create_test_context(create_euclidean_matrix(&create_line(8, 5)), 3, None);

    let routes = global_cheapest_arc(&context).expect("no solution");

    let mut nodes = routes.into_iter().flatten().collect::<Vec<_>>();
    nodes.sort_unstable();
    assert_eq!(nodes, (1..8).collect::<Vec<_>>());
}

parameterized_test! {can_handle_route_bounds, (vehicle_count, is_global, expected), {
    can_handle_route_bounds_impl(vehicle_count, is_global, expected);
}}

can_handle_route_bounds! {
    case01_path_not_enough_vehicles: (2, false, None),
    case02_path_enough_vehicles: (3, false, Some(3)),
    case03_global_not_enough_vehicles: (2, true, None),
    case04_global_enough_vehicles: (3, true, Some(3)),
}

fn can_handle_route_bounds_impl(vehicle_count: usize, is_global: bool, expected: Option<usize>) {
    let context = create_test_context(create_euclidean_matrix(&create_far_customers()), vehicle_count, Some(20));

    let routes = if is_global { global_cheapest_arc(&context) } else { path_cheapest_arc(&context) };

    let used = routes.map(|routes| {
        assert!(routes.iter().all(|route| route.len() <= 1));
        routes.iter().filter(|route| !route.is_empty()).count()
    });
    assert_eq!(used, expected);
}

#[test]
fn can_build_empty_routes_when_only_depot() {
    let context = create_test_context(create_euclidean_matrix(&[(0, 0)]), 2, None);

    assert_eq!(path_cheapest_arc(&context), Some(vec![vec![], vec![]]));
    assert_eq!(global_cheapest_arc(&context), Some(vec![vec![], vec![]]));
}
