#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use std::io::BufReader;
use tour_cli::core::engine::reference::ReferenceEngine;
use tour_cli::core::engine::RoutingEngine;
use tour_cli::core::utils::Timer;
use tour_cli::extensions::plot::PlottersTourPlotter;
use tour_cli::extensions::solve::config::*;
use tour_cli::extensions::solve::*;

const NAME_ARG_NAME: &str = "name";
const STRATEGIES_ARG_NAME: &str = "strategies";
const TIME_LIMIT_ARG_NAME: &str = "time-limit";
const VRP_ARG_NAME: &str = "vrp";
const VEHICLES_ARG_NAME: &str = "vehicles";
const COEFFICIENT_ARG_NAME: &str = "upper-limit-coefficient";
const DIMENSION_ARG_NAME: &str = "dimension";
const TIME_UNIT_SCALE_ARG_NAME: &str = "time-unit-scale";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const QUIET_SEARCH_ARG_NAME: &str = "quiet-search";
const PLOT_DIR_ARG_NAME: &str = "plot-dir";
const NO_PLOT_ARG_NAME: &str = "no-plot";
const OPTIMUM_ARG_NAME: &str = "optimum";

pub fn get_solve_app() -> Command {
    add_problem_args(Command::new("solve").about("Solves travelling salesman or vehicle routing problem"))
        .arg(
            Arg::new(NAME_ARG_NAME)
                .help("Specifies problem name used in image names, the problem file stem by default")
                .short('n')
                .long(NAME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STRATEGIES_ARG_NAME)
                .help("Specifies comma separated strategies: GLOBAL_CHEAPEST_ARC, PATH_CHEAPEST_ARC, GUIDED_LOCAL_SEARCH")
                .short('s')
                .long(STRATEGIES_ARG_NAME)
                .value_delimiter(',')
                .num_args(1..)
                .required(false),
        )
        .arg(
            Arg::new(TIME_LIMIT_ARG_NAME)
                .help("Specifies time limit of guided local search in seconds")
                .short('t')
                .long(TIME_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(VRP_ARG_NAME)
                .help("Solves vehicle routing problem instead of travelling salesman problem")
                .long(VRP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(VEHICLES_ARG_NAME).help("Specifies amount of vehicles").short('v').long(VEHICLES_ARG_NAME))
        .arg(
            Arg::new(COEFFICIENT_ARG_NAME)
                .help("Specifies coefficient applied to the maximum allowed route")
                .long(COEFFICIENT_ARG_NAME),
        )
        .arg(Arg::new(DIMENSION_ARG_NAME).help("Specifies name of the route dimension").long(DIMENSION_ARG_NAME))
        .arg(
            Arg::new(TIME_UNIT_SCALE_ARG_NAME)
                .help("Specifies divisor applied to reported route values")
                .long(TIME_UNIT_SCALE_ARG_NAME),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to configuration file, command line arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME),
        )
        .arg(Arg::new(LOG_ARG_NAME).help("Specifies path to the file where log is appended").long(LOG_ARG_NAME))
        .arg(
            Arg::new(QUIET_SEARCH_ARG_NAME)
                .help("Disables search progress logging")
                .long(QUIET_SEARCH_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(PLOT_DIR_ARG_NAME).help("Specifies output directory of images").long(PLOT_DIR_ARG_NAME))
        .arg(
            Arg::new(NO_PLOT_ARG_NAME)
                .help("Disables image rendering")
                .long(NO_PLOT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OPTIMUM_ARG_NAME)
                .help("Specifies path to the reference tour file which is reported and plotted")
                .short('o')
                .long(OPTIMUM_ARG_NAME),
        )
}

/// Runs solve command.
pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let logger = create_logger(matches.get_one::<String>(LOG_ARG_NAME).map(String::as_str))?;

    let data = Timer::measure_duration_with_callback(
        || read_problem_data(matches),
        |duration| (logger)(format!("distance matrix is built in {}ms", duration.as_millis()).as_str()),
    )?;

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")))?,
        None => Config::default(),
    };
    let config = override_config(matches, config)?;

    let problem_name = get_problem_name(matches);
    let solve_config = create_solve_config(problem_name.as_str(), &config).map_err(|err| err.to_string())?;

    let engine: Arc<dyn RoutingEngine> = Arc::new(ReferenceEngine::new(logger.clone()));
    let plotter: Arc<dyn TourPlotter> = if matches.get_flag(NO_PLOT_ARG_NAME) {
        Arc::new(NoopPlotter)
    } else {
        Arc::new(PlottersTourPlotter::new(create_plot_config(&config)))
    };

    if matches.get_flag(VRP_ARG_NAME) {
        let solver = VrpSolver::new(engine, data, solve_config, create_vrp_config(&config), logger, plotter)
            .map_err(|err| format!("cannot create vehicle routing problem: {err}"))?;

        solver.execute().map_err(|err| format!("cannot solve vehicle routing problem: {err}"))?;
    } else {
        let solver = TspSolver::new(engine, data, solve_config, logger, plotter)
            .map_err(|err| format!("cannot create travelling salesman problem: {err}"))?;

        solver.execute().map_err(|err| format!("cannot solve travelling salesman problem: {err}"))?;

        if let Some(path) = matches.get_one::<String>(OPTIMUM_ARG_NAME) {
            solver.log_and_plot_optimum_solution(Path::new(path));
        }
    }

    Ok(())
}

/// Applies command line arguments on top of the config read from file.
fn override_config(matches: &ArgMatches, config: Config) -> Result<Config, String> {
    let mut config = config;

    if let Some(strategies) = matches.get_many::<String>(STRATEGIES_ARG_NAME) {
        config.strategies = Some(strategies.cloned().collect());
    }

    if let Some(time_limit) = parse_int_value::<u64>(matches, TIME_LIMIT_ARG_NAME, "time limit")? {
        config.time_limit = Some(time_limit);
    }

    if matches.get_flag(QUIET_SEARCH_ARG_NAME) {
        config.log_search = Some(false);
    }

    let mut vrp = config.vrp.take().unwrap_or_default();
    vrp.vehicles = parse_int_value::<usize>(matches, VEHICLES_ARG_NAME, "vehicles")?.or(vrp.vehicles);
    vrp.upper_limit_coefficient =
        parse_float_value::<f64>(matches, COEFFICIENT_ARG_NAME, "upper limit coefficient")?.or(vrp.upper_limit_coefficient);
    vrp.time_unit_scale =
        parse_int_value::<u64>(matches, TIME_UNIT_SCALE_ARG_NAME, "time unit scale")?.or(vrp.time_unit_scale);
    vrp.dimension_name = matches.get_one::<String>(DIMENSION_ARG_NAME).cloned().or(vrp.dimension_name);
    config.vrp = Some(vrp);

    if let Some(directory) = matches.get_one::<String>(PLOT_DIR_ARG_NAME) {
        let mut plot = config.plot.take().unwrap_or_default();
        plot.directory = Some(directory.clone());
        config.plot = Some(plot);
    }

    Ok(config)
}

fn get_problem_name(matches: &ArgMatches) -> String {
    matches.get_one::<String>(NAME_ARG_NAME).cloned().unwrap_or_else(|| {
        matches
            .get_one::<String>(PROBLEM_ARG_NAME)
            .and_then(|path| Path::new(path).file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "problem".to_string())
    })
}

