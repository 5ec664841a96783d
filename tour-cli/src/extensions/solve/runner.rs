use super::config::SolveConfig;
use super::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use tour_core::engine::{CallbackId, RoutingEngine, RoutingModel};
use tour_core::models::{DistanceMatrix, PointSet, RoutingProblem};
use tour_core::utils::{GenericError, GenericResult, InfoLogger, Timer};

/// Runs strategies against the engine rebuilding the routing model before every attempt.
pub(crate) struct StrategyRunner {
    pub engine: Arc<dyn RoutingEngine>,
    pub problem: RoutingProblem,
    pub points: PointSet,
    pub config: SolveConfig,
    pub logger: InfoLogger,
    pub plotter: Arc<dyn TourPlotter>,
}

impl StrategyRunner {
    pub fn new(
        engine: Arc<dyn RoutingEngine>,
        matrix: DistanceMatrix,
        points: PointSet,
        vehicle_count: usize,
        config: SolveConfig,
        logger: InfoLogger,
        plotter: Arc<dyn TourPlotter>,
    ) -> GenericResult<Self> {
        if points.len() != matrix.size() {
            return Err(GenericError::from(format!(
                "point set size {} does not match matrix size {}",
                points.len(),
                matrix.size()
            )));
        }

        let problem = RoutingProblem::adapt(Arc::new(matrix), vehicle_count, engine.as_ref())?;

        Ok(Self { engine, problem, points, config, logger, plotter })
    }

    /// Runs selected strategies in canonical order, `configure` is applied to every fresh model
    /// after the distance callback is registered and set as the arc cost. Each attempt is passed
    /// to `report` before the next strategy starts.
    pub fn run<F, R>(&self, selected: &BTreeSet<Strategy>, configure: F, report: R) -> GenericResult<Vec<SolveAttempt>>
    where
        F: Fn(&mut dyn RoutingModel, CallbackId) -> GenericResult<()>,
        R: Fn(&SolveAttempt),
    {
        selected.iter().try_fold(Vec::with_capacity(selected.len()), |mut attempts, &strategy| {
            let attempt = self.run_strategy(strategy, &configure)?;
            report(&attempt);
            attempts.push(attempt);

            Ok(attempts)
        })
    }

    fn run_strategy<F>(&self, strategy: Strategy, configure: &F) -> GenericResult<SolveAttempt>
    where
        F: Fn(&mut dyn RoutingModel, CallbackId) -> GenericResult<()>,
    {
        let manager = self.problem.manager();
        let mut model = self.engine.create_model(manager.clone());

        let transit = model.register_transit_callback(self.problem.create_transit_callback());
        model.set_arc_cost_evaluator_of_all_vehicles(transit)?;
        configure(model.as_mut(), transit)?;

        let time_limit = strategy.is_time_limited().then_some(self.config.time_limit);
        let parameters = strategy.create_search_parameters(self.config.time_limit, self.config.log_search);

        (self.logger)(format!("Start to solve problem with {strategy} strategy").as_str());
        let solution = Timer::measure_duration_with_callback(
            || model.solve(&parameters),
            |duration| {
                (self.logger)(
                    format!("End to solve problem with {strategy} strategy in {}ms", duration.as_millis()).as_str(),
                )
            },
        )?;

        let solution = solution.map(|solution| TourSolution::from_engine(solution.as_ref(), manager.as_ref()));

        Ok(SolveAttempt { strategy, time_limit, solution })
    }

    /// Logs which strategy produced the result.
    pub fn log_attempt_header(&self, attempt: &SolveAttempt) {
        let message = match attempt.time_limit {
            Some(time_limit) => format!(
                "Solution achieved by {} strategy with time limit on {} seconds",
                attempt.strategy,
                time_limit.as_secs()
            ),
            None => format!("Solution achieved by {} strategy", attempt.strategy),
        };

        (self.logger)(message.as_str());

        if attempt.solution.is_none() {
            (self.logger)(format!("No solution found by {} strategy", attempt.strategy).as_str());
        }
    }

    /// Passes routes to the plotter, failures are logged as warnings.
    pub fn plot(&self, name: &str, routes: &[Vec<usize>]) {
        if let Err(err) = self.plotter.plot(name, &self.points, routes) {
            log_warning(&self.logger, format!("cannot plot '{name}': {err}").as_str());
        }
    }
}
