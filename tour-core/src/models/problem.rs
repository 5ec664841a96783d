#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::engine::{IndexManager, RouteIndex, RoutingEngine, TransitCallback};
use crate::models::{Distance, DistanceMatrix};
use crate::utils::{GenericError, GenericResult};
use std::sync::Arc;

/// A depot index used by default: every route starts and ends at the first node.
pub const DEFAULT_DEPOT: usize = 0;

/// Wraps a distance matrix into a data contract expected by the routing engine.
///
/// The index manager is created once by the engine and shared by all models built for this
/// problem, distance lookups always go through it.
pub struct RoutingProblem {
    matrix: Arc<DistanceMatrix>,
    vehicle_count: usize,
    depot: usize,
    manager: Arc<dyn IndexManager>,
}

impl RoutingProblem {
    /// Creates a new instance of `RoutingProblem`.
    pub fn new(
        matrix: Arc<DistanceMatrix>,
        vehicle_count: usize,
        depot: usize,
        engine: &dyn RoutingEngine,
    ) -> GenericResult<Self> {
        if vehicle_count == 0 {
            return Err("vehicle count should be at least one".into());
        }

        if depot >= matrix.size() {
            return Err(GenericError::from(format!(
                "depot index {depot} is out of range for matrix of size {}",
                matrix.size()
            )));
        }

        let manager = engine.create_index_manager(matrix.size(), vehicle_count, depot)?;

        Ok(Self { matrix, vehicle_count, depot, manager })
    }

    /// Creates a new instance of `RoutingProblem` with depot at the first node.
    pub fn adapt(matrix: Arc<DistanceMatrix>, vehicle_count: usize, engine: &dyn RoutingEngine) -> GenericResult<Self> {
        Self::new(matrix, vehicle_count, DEFAULT_DEPOT, engine)
    }

    /// Returns distance between two engine indices.
    pub fn distance_between(&self, from: RouteIndex, to: RouteIndex) -> Distance {
        distance_between(self.matrix.as_ref(), self.manager.as_ref(), from, to)
    }

    /// Creates a transit callback to be registered within the routing model.
    pub fn create_transit_callback(&self) -> TransitCallback {
        let matrix = self.matrix.clone();
        let manager = self.manager.clone();

        Arc::new(move |from, to| distance_between(matrix.as_ref(), manager.as_ref(), from, to))
    }

    /// Returns distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        self.matrix.as_ref()
    }

    /// Returns amount of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Returns depot node index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Returns the index manager.
    pub fn manager(&self) -> Arc<dyn IndexManager> {
        self.manager.clone()
    }
}

fn distance_between(matrix: &DistanceMatrix, manager: &dyn IndexManager, from: RouteIndex, to: RouteIndex) -> Distance {
    matrix.distance(manager.index_to_node(from), manager.index_to_node(to))
}
