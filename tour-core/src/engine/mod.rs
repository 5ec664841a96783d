//! Describes a routing engine capability used to solve routing problems.
//!
//! The shape of the api follows the classical constraint-programming routing libraries: an index
//! manager translates between node indices and engine indices, a routing model gets transit
//! callbacks, an arc cost evaluator and optional cumulative dimensions, and a solve call returns
//! either a solution or nothing when no feasible solution is found.

use crate::models::Distance;
use crate::utils::GenericResult;
use std::sync::Arc;

mod params;
pub use self::params::*;

pub mod reference;

/// An engine specific index of a route variable. Every node has at least one index, the depot
/// has one start and one end index per vehicle.
pub type RouteIndex = usize;

/// A transit callback which returns the cost of moving between two engine indices.
pub type TransitCallback = Arc<dyn Fn(RouteIndex, RouteIndex) -> Distance>;

/// An identifier of a transit callback registered within a routing model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(pub usize);

/// A cumulative quantity tracked along each route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    /// A unique dimension name.
    pub name: String,
    /// A transit callback which defines how the quantity grows between two indices.
    pub transit: CallbackId,
    /// A lower bound of cumulative value at every route index.
    pub lower_bound: Distance,
    /// An upper bound of cumulative value at every route index.
    pub upper_bound: Distance,
    /// Whether cumulative value is fixed to zero at route start.
    pub start_cumul_at_zero: bool,
}

/// Translates between natural node indices and engine route indices.
pub trait IndexManager {
    /// Returns amount of nodes.
    fn node_count(&self) -> usize;

    /// Returns amount of vehicles.
    fn vehicle_count(&self) -> usize;

    /// Returns depot node.
    fn depot(&self) -> usize;

    /// Returns total amount of route indices.
    fn index_count(&self) -> usize;

    /// Converts route index to node index.
    fn index_to_node(&self, index: RouteIndex) -> usize;

    /// Converts node index to route index. For the depot, the start index of the first vehicle is returned.
    fn node_to_index(&self, node: usize) -> RouteIndex;

    /// Returns start index of the vehicle.
    fn start_index(&self, vehicle: usize) -> RouteIndex;

    /// Returns end index of the vehicle.
    fn end_index(&self, vehicle: usize) -> RouteIndex;
}

/// A solution returned by the routing engine.
pub trait RoutingSolution {
    /// Returns objective value.
    fn objective_value(&self) -> Distance;

    /// Returns start index of vehicle's route.
    fn start(&self, vehicle: usize) -> RouteIndex;

    /// Returns true if index is an end of some route.
    fn is_end(&self, index: RouteIndex) -> bool;

    /// Returns next index in the route.
    fn next(&self, index: RouteIndex) -> RouteIndex;

    /// Returns cost of the arc for the given vehicle.
    fn arc_cost_for_vehicle(&self, from: RouteIndex, to: RouteIndex, vehicle: usize) -> Distance;
}

/// A routing model built for one solve attempt.
pub trait RoutingModel {
    /// Registers transit callback and returns its id.
    fn register_transit_callback(&mut self, callback: TransitCallback) -> CallbackId;

    /// Uses the registered callback as arc cost for all vehicles.
    fn set_arc_cost_evaluator_of_all_vehicles(&mut self, callback: CallbackId) -> GenericResult<()>;

    /// Adds a cumulative dimension.
    fn add_dimension(&mut self, dimension: Dimension) -> GenericResult<()>;

    /// Sets global span cost coefficient for the dimension with the given name.
    fn set_global_span_cost_coefficient(&mut self, dimension: &str, coefficient: Distance) -> GenericResult<()>;

    /// Solves the model. Returns `Ok(None)` when no solution is found. An error is returned only
    /// when the model is misconfigured.
    fn solve(&mut self, parameters: &SearchParameters) -> GenericResult<Option<Box<dyn RoutingSolution>>>;
}

/// A routing engine capability.
pub trait RoutingEngine {
    /// Creates index manager for the given problem shape.
    fn create_index_manager(
        &self,
        node_count: usize,
        vehicle_count: usize,
        depot: usize,
    ) -> GenericResult<Arc<dyn IndexManager>>;

    /// Creates a new routing model over the index space of the manager.
    fn create_model(&self, manager: Arc<dyn IndexManager>) -> Box<dyn RoutingModel>;
}
