#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/report_test.rs"]
mod report_test;

use super::Strategy;
use std::time::Duration;
use tour_core::engine::{IndexManager, RoutingSolution};
use tour_core::models::{Distance, PointSet};
use tour_core::utils::{GenericResult, InfoLogger};

/// Renders tours into images.
pub trait TourPlotter {
    /// Renders points and routes given as node sequences into an image with the given name.
    fn plot(&self, name: &str, points: &PointSet, routes: &[Vec<usize>]) -> GenericResult<()>;
}

/// A plotter which renders nothing.
#[derive(Default)]
pub struct NoopPlotter;

impl TourPlotter for NoopPlotter {
    fn plot(&self, _: &str, _: &PointSet, _: &[Vec<usize>]) -> GenericResult<()> {
        Ok(())
    }
}

/// A route of a single vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRoute {
    /// A vehicle index.
    pub vehicle: usize,
    /// Visited nodes including start and end depot visits.
    pub nodes: Vec<usize>,
    /// Total arc cost of the route.
    pub distance: Distance,
}

/// A solution returned by the engine converted to node sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourSolution {
    /// Objective value reported by the engine.
    pub objective: Distance,
    /// Routes of every vehicle.
    pub routes: Vec<VehicleRoute>,
}

impl TourSolution {
    /// Walks the engine solution from every vehicle start until its end.
    pub fn from_engine(solution: &dyn RoutingSolution, manager: &dyn IndexManager) -> Self {
        let routes = (0..manager.vehicle_count())
            .map(|vehicle| {
                let mut index = solution.start(vehicle);
                let mut nodes = vec![manager.index_to_node(index)];
                let mut distance = 0;

                while !solution.is_end(index) {
                    let previous = index;
                    index = solution.next(index);
                    distance += solution.arc_cost_for_vehicle(previous, index, vehicle);
                    nodes.push(manager.index_to_node(index));
                }

                VehicleRoute { vehicle, nodes, distance }
            })
            .collect();

        Self { objective: solution.objective_value(), routes }
    }

    /// Returns node sequences of all routes.
    pub fn node_routes(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|route| route.nodes.clone()).collect()
    }
}

/// An outcome of a single strategy run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveAttempt {
    /// A used strategy.
    pub strategy: Strategy,
    /// A time limit, set for time limited strategies only.
    pub time_limit: Option<Duration>,
    /// A found solution or `None` when the engine found no feasible one.
    pub solution: Option<TourSolution>,
}

/// Returns image name of the strategy result.
pub fn get_plot_name(problem_name: &str, strategy: Strategy, time_limit: Option<Duration>) -> String {
    match time_limit {
        Some(time_limit) => format!("{problem_name}_{strategy}_{}_seconds", time_limit.as_secs()),
        None => format!("{problem_name}_{strategy}"),
    }
}

/// Returns image name of the optimum tour.
pub fn get_optimum_plot_name(problem_name: &str) -> String {
    format!("{problem_name}_OPTIMUM_ROUTE")
}

/// Formats a route as 1-indexed nodes: `Route for vehicle 1:\n 1 -> 3 -> 2 -> 1`.
pub fn format_route(label: usize, nodes: &[usize]) -> String {
    let nodes = nodes.iter().map(|node| format!(" {}", node + 1)).collect::<Vec<_>>().join(" ->");

    format!("Route for vehicle {label}:\n{nodes}")
}

/// Formats a value optionally dividing it by the scale.
pub fn format_scaled(value: Distance, time_unit_scale: Option<u64>) -> String {
    match time_unit_scale {
        Some(scale) if scale > 0 => format!("{}", value as f64 / scale as f64),
        _ => value.to_string(),
    }
}

/// Logs a warning.
pub(crate) fn log_warning(logger: &InfoLogger, message: &str) {
    (logger)(format!("warning: {message}").as_str());
}
