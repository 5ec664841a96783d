#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/tsp_test.rs"]
mod tsp_test;

use super::config::SolveConfig;
use super::runner::StrategyRunner;
use super::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::iter::once;
use std::path::Path;
use std::sync::Arc;
use tour_core::engine::RoutingEngine;
use tour_core::models::Distance;
use tour_core::utils::{GenericError, GenericResult, InfoLogger};
use tour_scientific::tour::ReferenceTour;
use tour_scientific::ProblemData;

/// Runs strategies for a travelling salesman problem: a single vehicle starts and ends at the
/// depot and visits every node.
pub struct TspSolver {
    runner: StrategyRunner,
}

impl TspSolver {
    /// Creates a new instance of `TspSolver`.
    pub fn new(
        engine: Arc<dyn RoutingEngine>,
        data: ProblemData,
        config: SolveConfig,
        logger: InfoLogger,
        plotter: Arc<dyn TourPlotter>,
    ) -> GenericResult<Self> {
        Ok(Self { runner: StrategyRunner::new(engine, data.matrix, data.points, 1, config, logger, plotter)? })
    }

    /// Runs strategies from the configuration.
    pub fn execute(&self) -> GenericResult<Vec<SolveAttempt>> {
        self.execute_strategies(&self.runner.config.strategies)
    }

    /// Runs selected strategies in canonical order reporting every result.
    pub fn execute_strategies(&self, selected: &BTreeSet<Strategy>) -> GenericResult<Vec<SolveAttempt>> {
        self.runner.run(selected, |_, _| Ok(()), |attempt| self.report(attempt))
    }

    /// Reads a reference tour, logs its length and plots it. Failures are logged as warnings only.
    /// Returns the tour length when the tour is read.
    pub fn log_and_plot_optimum_solution(&self, path: &Path) -> Option<Distance> {
        let matrix = self.runner.problem.matrix();

        let tour = File::open(path)
            .map_err(GenericError::from)
            .and_then(|file| BufReader::new(file).read_tour(matrix.size()).map_err(GenericError::from));

        let tour = match tour {
            Ok(tour) => tour,
            Err(err) => {
                let message = format!("problem opening optimum solution file '{}'", path.display());
                log_warning(&self.runner.logger, message.as_str());
                log_warning(&self.runner.logger, format!("resulting on the error: {err}").as_str());
                return None;
            }
        };

        // the tour starts and ends at the first node
        let nodes = once(0).chain(tour.iter().copied()).chain(once(0)).collect::<Vec<_>>();
        let distance = nodes.windows(2).map(|pair| matrix.distance(pair[0], pair[1])).sum::<Distance>();

        let route = tour.iter().map(|node| (node + 1).to_string()).chain(once("1".to_string())).collect::<Vec<_>>();

        let logger = &self.runner.logger;
        (logger)("Optimum Solution");
        (logger)(format!("Objective: {distance} Unit of Measure").as_str());
        (logger)(format!("Route on opt file:\n{}", route.join(" -> ")).as_str());

        let mut polyline = nodes;
        polyline.dedup();
        self.runner.plot(&get_optimum_plot_name(&self.runner.config.problem_name), &[polyline]);

        Some(distance)
    }

    fn report(&self, attempt: &SolveAttempt) {
        self.runner.log_attempt_header(attempt);

        let Some(solution) = &attempt.solution else { return };
        let logger = &self.runner.logger;

        (logger)(format!("Objective: {} Unit of Measure", solution.objective).as_str());
        solution.routes.iter().for_each(|route| (logger)(format_route(route.vehicle + 1, &route.nodes).as_str()));

        let name = get_plot_name(&self.runner.config.problem_name, attempt.strategy, attempt.time_limit);
        self.runner.plot(&name, &solution.node_routes());
    }
}
