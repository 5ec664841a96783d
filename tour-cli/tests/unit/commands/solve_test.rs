use super::*;

fn get_matches(args: &[&str]) -> ArgMatches {
    get_solve_app().try_get_matches_from(args.iter().copied()).expect("cannot parse arguments")
}

#[test]
fn can_override_config_with_arguments() {
    let matches = get_matches(&[
        "solve",
        "../data/sectioned/depot4.txt",
        "--rows",
        "4",
        "--strategies",
        "GLS,PATH_CHEAPEST_ARC",
        "--time-limit",
        "3",
        "--vehicles",
        "2",
        "--upper-limit-coefficient",
        "0.5",
        "--quiet-search",
        "--plot-dir",
        "images",
    ]);
    let config = Config { time_limit: Some(10), log_search: Some(true), ..Config::default() };

    let config = override_config(&matches, config).expect("cannot override config");

    assert_eq!(config.strategies, Some(vec!["GLS".to_string(), "PATH_CHEAPEST_ARC".to_string()]));
    assert_eq!(config.time_limit, Some(3));
    assert_eq!(config.log_search, Some(false));
    let vrp = config.vrp.expect("no vrp settings");
    assert_eq!(vrp.vehicles, Some(2));
    assert_eq!(vrp.upper_limit_coefficient, Some(0.5));
    assert_eq!(vrp.dimension_name, None);
    assert_eq!(config.plot.and_then(|plot| plot.directory), Some("images".to_string()));
}

#[test]
fn can_keep_config_values_without_arguments() {
    let matches = get_matches(&["solve", "../data/tsplib/square5.txt", "--rows", "5"]);
    let config = Config { time_limit: Some(10), ..Config::default() };

    let config = override_config(&matches, config).expect("cannot override config");

    assert_eq!(config.strategies, None);
    assert_eq!(config.time_limit, Some(10));
    assert_eq!(config.log_search, None);
}

#[test]
fn can_reject_malformed_number() {
    let matches = get_matches(&["solve", "../data/tsplib/square5.txt", "--rows", "5", "--vehicles", "two"]);

    assert!(override_config(&matches, Config::default()).is_err());
}

#[test]
fn can_use_file_stem_as_problem_name() {
    let matches = get_matches(&["solve", "../data/tsplib/square5.txt", "--rows", "5"]);
    assert_eq!(get_problem_name(&matches), "square5");

    let matches = get_matches(&["solve", "../data/tsplib/square5.txt", "--rows", "5", "--name", "custom"]);
    assert_eq!(get_problem_name(&matches), "custom");
}

#[test]
fn can_solve_tsp_without_plotting() {
    let matches = get_matches(&[
        "solve",
        "../data/tsplib/square5.txt",
        "--rows",
        "5",
        "--strategies",
        "GLOBAL_CHEAPEST_ARC,PATH_CHEAPEST_ARC",
        "--no-plot",
        "--optimum",
        "../data/tsplib/square5.opt.tour",
    ]);

    assert_eq!(run_solve(&matches), Ok(()));
}

#[test]
fn can_solve_vrp_and_append_log_file() {
    let directory = tempfile::tempdir().expect("cannot create temp dir");
    let log = directory.path().join("solve.log");
    let matches = get_matches(&[
        "solve",
        "../data/sectioned/depot4.txt",
        "--rows",
        "4",
        "--format",
        "sectioned",
        "--vrp",
        "--vehicles",
        "2",
        "--upper-limit-coefficient",
        "0.5",
        "--no-plot",
        "--log",
        log.to_str().unwrap(),
    ]);

    assert_eq!(run_solve(&matches), Ok(()));

    let content = std::fs::read_to_string(log).unwrap();
    assert!(content.contains("Max Allowed Route: 50 Dimension"));
    assert!(content.contains("Maximum of the route distances:"));
}

#[test]
fn can_fail_vrp_without_route_bound() {
    let matches = get_matches(&["solve", "../data/tsplib/square5.txt", "--rows", "5", "--vrp", "--no-plot"]);

    assert!(run_solve(&matches).is_err_and(|err| err.contains("MAX_ALLOWED_ROUTE")));
}
