use super::*;
use tour_core::engine::LocalSearchMetaheuristic;

parameterized_test! {can_parse_strategy_name, (name, expected), {
    assert_eq!(name.parse::<Strategy>().ok(), expected);
}}

can_parse_strategy_name! {
    case01_canonical_global: ("GLOBAL_CHEAPEST_ARC", Some(Strategy::GlobalCheapestArc)),
    case02_alias_global: ("FIRST_ARC_GLOBAL", Some(Strategy::GlobalCheapestArc)),
    case03_canonical_path: ("PATH_CHEAPEST_ARC", Some(Strategy::PathCheapestArc)),
    case04_alias_path: ("path-arc", Some(Strategy::PathCheapestArc)),
    case05_canonical_gls: ("GUIDED_LOCAL_SEARCH", Some(Strategy::GuidedLocalSearch)),
    case06_alias_gls: (" gls ", Some(Strategy::GuidedLocalSearch)),
    case07_unknown: ("SIMULATED_ANNEALING", None),
    case08_empty: ("", None),
}

#[test]
fn can_parse_strategies_in_canonical_order_without_duplicates() {
    let strategies = parse_strategies(&["GLS", "PATH_CHEAPEST_ARC", "GLOBAL_ARC", "GLS"]).expect("cannot parse");

    assert_eq!(
        strategies.into_iter().collect::<Vec<_>>(),
        vec![Strategy::GlobalCheapestArc, Strategy::PathCheapestArc, Strategy::GuidedLocalSearch]
    );
}

#[test]
fn can_reject_unknown_strategy_in_list() {
    let result = parse_strategies(&["GLS", "UNKNOWN"]);

    assert_eq!(result.map_err(|err| err.to_string()), Err("unknown strategy: 'UNKNOWN'".to_string()));
}

#[test]
fn can_use_name_as_display() {
    assert_eq!(Strategy::all().iter().map(|strategy| strategy.to_string()).collect::<Vec<_>>(), vec![
        "GLOBAL_CHEAPEST_ARC",
        "PATH_CHEAPEST_ARC",
        "GUIDED_LOCAL_SEARCH"
    ]);
}

#[test]
fn can_create_search_parameters() {
    let time_limit = Duration::from_secs(5);

    let global = Strategy::GlobalCheapestArc.create_search_parameters(time_limit, true);
    let path = Strategy::PathCheapestArc.create_search_parameters(time_limit, true);
    let gls = Strategy::GuidedLocalSearch.create_search_parameters(time_limit, true);

    assert_eq!(global.first_solution_strategy, FirstSolutionStrategy::GlobalCheapestArc);
    assert_eq!(global.time_limit, None);
    assert!(!global.log_search);
    assert_eq!(path.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
    assert_eq!(gls.local_search_metaheuristic, LocalSearchMetaheuristic::GuidedLocalSearch);
    assert_eq!(gls.time_limit, Some(time_limit));
    assert!(gls.log_search);
    assert!(Strategy::GuidedLocalSearch.is_time_limited());
    assert!(!Strategy::PathCheapestArc.is_time_limited());
}
