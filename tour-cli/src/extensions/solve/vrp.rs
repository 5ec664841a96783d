#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/vrp_test.rs"]
mod vrp_test;

use super::config::{SolveConfig, VrpConfig};
use super::runner::StrategyRunner;
use super::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use tour_core::engine::{Dimension, RoutingEngine};
use tour_core::models::{Distance, RouteBound};
use tour_core::utils::{GenericError, GenericResult, InfoLogger};
use tour_scientific::ProblemData;

/// Runs strategies for a vehicle routing problem: several vehicles share the nodes while every
/// route stays within a fraction of the maximum allowed route and a span cost balances route lengths.
pub struct VrpSolver {
    runner: StrategyRunner,
    vrp_config: VrpConfig,
    route_bound: RouteBound,
}

impl VrpSolver {
    /// Creates a new instance of `VrpSolver`. The problem data must have a route bound.
    pub fn new(
        engine: Arc<dyn RoutingEngine>,
        data: ProblemData,
        config: SolveConfig,
        vrp_config: VrpConfig,
        logger: InfoLogger,
        plotter: Arc<dyn TourPlotter>,
    ) -> GenericResult<Self> {
        let route_bound = data.require_route_bound()?;

        if !(vrp_config.upper_limit_coefficient.is_finite() && vrp_config.upper_limit_coefficient > 0.) {
            return Err(GenericError::from(format!(
                "upper limit coefficient should be positive, got {}",
                vrp_config.upper_limit_coefficient
            )));
        }

        let runner =
            StrategyRunner::new(engine, data.matrix, data.points, vrp_config.vehicle_count, config, logger, plotter)?;

        Ok(Self { runner, vrp_config, route_bound })
    }

    /// Returns upper bound of the route dimension.
    pub fn route_capacity(&self) -> Distance {
        self.route_bound.capacity(self.vrp_config.upper_limit_coefficient)
    }

    /// Returns global span cost coefficient of the route dimension.
    pub fn span_cost_coefficient(&self) -> Distance {
        self.route_bound.span_cost_coefficient(self.vrp_config.upper_limit_coefficient)
    }

    /// Runs strategies from the configuration.
    pub fn execute(&self) -> GenericResult<Vec<SolveAttempt>> {
        self.execute_strategies(&self.runner.config.strategies)
    }

    /// Runs selected strategies in canonical order reporting every result.
    pub fn execute_strategies(&self, selected: &BTreeSet<Strategy>) -> GenericResult<Vec<SolveAttempt>> {
        let dimension_name = self.vrp_config.dimension_name.as_str();
        let (capacity, span_cost_coefficient) = (self.route_capacity(), self.span_cost_coefficient());

        self.runner.run(
            selected,
            |model, transit| {
                model.add_dimension(Dimension {
                    name: dimension_name.to_string(),
                    transit,
                    lower_bound: 0,
                    upper_bound: capacity,
                    start_cumul_at_zero: true,
                })?;
                model.set_global_span_cost_coefficient(dimension_name, span_cost_coefficient)
            },
            |attempt| self.report(attempt),
        )
    }

    fn report(&self, attempt: &SolveAttempt) {
        self.runner.log_attempt_header(attempt);

        let Some(solution) = &attempt.solution else { return };
        let logger = &self.runner.logger;
        let (dimension, scale) = (self.vrp_config.dimension_name.as_str(), self.vrp_config.time_unit_scale);

        let max_allowed = self.route_bound.max_route as f64 * self.vrp_config.upper_limit_coefficient;
        let max_allowed = match scale {
            Some(scale) if scale > 0 => max_allowed / scale as f64,
            _ => max_allowed,
        };
        (logger)(format!("Max Allowed Route: {max_allowed} {dimension}").as_str());
        (logger)(format!("Max Possible Route: {} {dimension}", format_scaled(self.route_bound.max_route, scale)).as_str());
        (logger)(format!("Objective: {} Unit of Measure", solution.objective).as_str());

        solution.routes.iter().for_each(|route| {
            (logger)(
                format!(
                    "{}\nDistance of the route: {} {dimension}",
                    format_route(route.vehicle, &route.nodes),
                    format_scaled(route.distance, scale)
                )
                .as_str(),
            );
        });

        let max_distance = solution.routes.iter().map(|route| route.distance).max().unwrap_or(0);
        (logger)(format!("Maximum of the route distances: {} {dimension}", format_scaled(max_distance, scale)).as_str());

        let name = get_plot_name(&self.runner.config.problem_name, attempt.strategy, attempt.time_limit);
        self.runner.plot(&name, &solution.node_routes());
    }
}
