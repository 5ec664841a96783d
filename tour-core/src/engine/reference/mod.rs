//! A reference implementation of the routing engine.
//!
//! The engine constructs a first solution with one of the cheapest arc heuristics and improves it
//! with relocate and 2-opt moves restricted to nearest neighbours. Guided local search escapes
//! local optima by penalizing arcs of the current solution. Cumulative dimensions are supported
//! with cumul values fixed to zero at route start.

#[cfg(test)]
#[path = "../../../tests/unit/engine/reference/engine_test.rs"]
mod engine_test;

use crate::engine::*;
use crate::models::Distance;
use crate::utils::*;
use std::sync::Arc;

mod construction;
mod context;
mod guided;
mod index;
mod local_search;

pub use self::index::RoutingIndexManager;

use self::context::{DimensionContext, Routes, SearchContext};

/// Amount of nearest neighbours considered by local search moves.
const NEIGHBOURHOOD_SIZE: usize = 32;

/// A reference routing engine.
pub struct ReferenceEngine {
    logger: InfoLogger,
}

impl ReferenceEngine {
    /// Creates a new instance of `ReferenceEngine` which uses the logger when search logging is on.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new(create_silent_logger())
    }
}

impl RoutingEngine for ReferenceEngine {
    fn create_index_manager(
        &self,
        node_count: usize,
        vehicle_count: usize,
        depot: usize,
    ) -> GenericResult<Arc<dyn IndexManager>> {
        Ok(Arc::new(RoutingIndexManager::new(node_count, vehicle_count, depot)?))
    }

    fn create_model(&self, manager: Arc<dyn IndexManager>) -> Box<dyn RoutingModel> {
        Box::new(ReferenceModel {
            manager,
            callbacks: vec![],
            arc_cost: None,
            dimensions: vec![],
            logger: self.logger.clone(),
        })
    }
}

struct DimensionEntry {
    dimension: Dimension,
    span_coefficient: Distance,
}

struct ReferenceModel {
    manager: Arc<dyn IndexManager>,
    callbacks: Vec<TransitCallback>,
    arc_cost: Option<CallbackId>,
    dimensions: Vec<DimensionEntry>,
    logger: InfoLogger,
}

impl ReferenceModel {
    fn get_callback(&self, id: CallbackId) -> GenericResult<TransitCallback> {
        self.callbacks.get(id.0).cloned().ok_or_else(|| GenericError::from(format!("unknown transit callback: {}", id.0)))
    }

    fn create_context(&self) -> GenericResult<SearchContext> {
        let arc_cost = self.arc_cost.ok_or_else(|| GenericError::from("arc cost evaluator is not set"))?;
        let arc_cost = self.get_callback(arc_cost)?;

        let dimensions = self
            .dimensions
            .iter()
            .map(|entry| {
                Ok(DimensionContext {
                    transit: self.get_callback(entry.dimension.transit)?,
                    lower_bound: entry.dimension.lower_bound,
                    upper_bound: entry.dimension.upper_bound,
                    span_coefficient: entry.span_coefficient,
                })
            })
            .collect::<GenericResult<Vec<_>>>()?;

        Ok(SearchContext::new(self.manager.clone(), arc_cost, dimensions))
    }
}

impl RoutingModel for ReferenceModel {
    fn register_transit_callback(&mut self, callback: TransitCallback) -> CallbackId {
        self.callbacks.push(callback);
        CallbackId(self.callbacks.len() - 1)
    }

    fn set_arc_cost_evaluator_of_all_vehicles(&mut self, callback: CallbackId) -> GenericResult<()> {
        self.get_callback(callback)?;
        self.arc_cost = Some(callback);

        Ok(())
    }

    fn add_dimension(&mut self, dimension: Dimension) -> GenericResult<()> {
        self.get_callback(dimension.transit)?;

        if self.dimensions.iter().any(|entry| entry.dimension.name == dimension.name) {
            return Err(GenericError::from(format!("dimension '{}' is already added", dimension.name)));
        }

        if dimension.lower_bound > dimension.upper_bound {
            return Err(GenericError::from(format!(
                "dimension '{}' has lower bound {} greater than upper bound {}",
                dimension.name, dimension.lower_bound, dimension.upper_bound
            )));
        }

        self.dimensions.push(DimensionEntry { dimension, span_coefficient: 0 });

        Ok(())
    }

    fn set_global_span_cost_coefficient(&mut self, dimension: &str, coefficient: Distance) -> GenericResult<()> {
        if coefficient < 0 {
            return Err(GenericError::from(format!("negative span cost coefficient: {coefficient}")));
        }

        let entry = self
            .dimensions
            .iter_mut()
            .find(|entry| entry.dimension.name == dimension)
            .ok_or_else(|| GenericError::from(format!("unknown dimension: '{dimension}'")))?;

        entry.span_coefficient = coefficient;

        Ok(())
    }

    fn solve(&mut self, parameters: &SearchParameters) -> GenericResult<Option<Box<dyn RoutingSolution>>> {
        let context = self.create_context()?;
        let timer = Timer::start();
        let quota = parameters.time_limit.map(|limit| TimeQuota::new(limit.as_secs_f64()));
        let quota = quota.as_ref().map(|quota| quota as &dyn Quota);
        let logger = if parameters.log_search { Some(&self.logger) } else { None };

        let routes = match parameters.first_solution_strategy {
            FirstSolutionStrategy::GlobalCheapestArc => construction::global_cheapest_arc(&context),
            FirstSolutionStrategy::PathCheapestArc | FirstSolutionStrategy::Automatic => {
                construction::path_cheapest_arc(&context)
            }
        };

        let Some(mut routes) = routes else {
            if let Some(logger) = logger {
                (logger)(format!("[{}ms] no feasible first solution found", timer.elapsed_millis()).as_str());
            }
            return Ok(None);
        };

        if let Some(logger) = logger {
            (logger)(
                format!("[{}ms] first solution with cost {}", timer.elapsed_millis(), context.objective(&routes))
                    .as_str(),
            );
        }

        let neighbours = context.create_neighbours(NEIGHBOURHOOD_SIZE);

        match parameters.local_search_metaheuristic {
            LocalSearchMetaheuristic::GuidedLocalSearch => {
                routes = guided::search(&context, routes, &neighbours, quota, logger);
            }
            LocalSearchMetaheuristic::GreedyDescent | LocalSearchMetaheuristic::Automatic => {
                let arc_cost = context.arc_cost.clone();
                local_search::descend(&context, &mut routes, arc_cost.as_ref(), &neighbours, quota);
            }
        }

        let solution = ReferenceSolution::new(&context, &routes);

        if let Some(logger) = logger {
            (logger)(
                format!("[{}ms] search finished with cost {}", timer.elapsed_millis(), solution.objective).as_str(),
            );
        }

        Ok(Some(Box::new(solution)))
    }
}

/// A solution of the reference engine.
struct ReferenceSolution {
    objective: Distance,
    starts: Vec<RouteIndex>,
    is_end: Vec<bool>,
    next: Vec<RouteIndex>,
    arc_cost: TransitCallback,
}

impl ReferenceSolution {
    fn new(context: &SearchContext, routes: &Routes) -> Self {
        let manager = context.manager.as_ref();
        let index_count = manager.index_count();

        let mut next = (0..index_count).collect::<Vec<_>>();
        let mut is_end = vec![false; index_count];

        let starts = routes
            .iter()
            .enumerate()
            .map(|(vehicle, route)| {
                let path = context.full_path(vehicle, route);
                path.windows(2).for_each(|pair| next[pair[0]] = pair[1]);
                is_end[manager.end_index(vehicle)] = true;

                manager.start_index(vehicle)
            })
            .collect();

        Self { objective: context.objective(routes), starts, is_end, next, arc_cost: context.arc_cost.clone() }
    }
}

impl RoutingSolution for ReferenceSolution {
    fn objective_value(&self) -> Distance {
        self.objective
    }

    fn start(&self, vehicle: usize) -> RouteIndex {
        self.starts[vehicle]
    }

    fn is_end(&self, index: RouteIndex) -> bool {
        self.is_end[index]
    }

    fn next(&self, index: RouteIndex) -> RouteIndex {
        self.next[index]
    }

    fn arc_cost_for_vehicle(&self, from: RouteIndex, to: RouteIndex, _: usize) -> Distance {
        (self.arc_cost)(from, to)
    }
}
