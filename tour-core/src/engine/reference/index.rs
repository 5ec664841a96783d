#[cfg(test)]
#[path = "../../../tests/unit/engine/reference/index_test.rs"]
mod index_test;

use crate::engine::{IndexManager, RouteIndex};
use crate::utils::{GenericError, GenericResult};

/// An index manager for a single depot problem.
///
/// Route indices `0..node_count` map to the nodes with the same index, so the depot index is
/// the start of the first vehicle. Starts of other vehicles follow, then ends of all vehicles,
/// which gives `node_count + 2 * vehicle_count - 1` indices in total.
#[derive(Clone, Debug)]
pub struct RoutingIndexManager {
    node_count: usize,
    vehicle_count: usize,
    depot: usize,
}

impl RoutingIndexManager {
    /// Creates a new instance of `RoutingIndexManager`.
    pub fn new(node_count: usize, vehicle_count: usize, depot: usize) -> GenericResult<Self> {
        if node_count == 0 || vehicle_count == 0 {
            return Err("index manager requires at least one node and one vehicle".into());
        }

        if depot >= node_count {
            return Err(GenericError::from(format!("depot {depot} is out of range, node count is {node_count}")));
        }

        Ok(Self { node_count, vehicle_count, depot })
    }
}

impl IndexManager for RoutingIndexManager {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    fn depot(&self) -> usize {
        self.depot
    }

    fn index_count(&self) -> usize {
        self.node_count + 2 * self.vehicle_count - 1
    }

    fn index_to_node(&self, index: RouteIndex) -> usize {
        if index < self.node_count { index } else { self.depot }
    }

    fn node_to_index(&self, node: usize) -> RouteIndex {
        node
    }

    fn start_index(&self, vehicle: usize) -> RouteIndex {
        if vehicle == 0 { self.depot } else { self.node_count + vehicle - 1 }
    }

    fn end_index(&self, vehicle: usize) -> RouteIndex {
        self.node_count + self.vehicle_count - 1 + vehicle
    }
}
