use crate::engine::{IndexManager, RouteIndex, TransitCallback};
use crate::models::Distance;
use std::iter::once;
use std::sync::Arc;

/// Customer indices per vehicle, start and end indices are implicit.
pub(super) type Routes = Vec<Vec<RouteIndex>>;

/// A dimension prepared for the search.
pub(super) struct DimensionContext {
    pub transit: TransitCallback,
    pub lower_bound: Distance,
    pub upper_bound: Distance,
    pub span_coefficient: Distance,
}

impl DimensionContext {
    pub fn is_within_bounds(&self, value: Distance) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Returns cumulative value at the end of the path, ignoring bounds.
    pub fn path_value(&self, path: &[RouteIndex]) -> Distance {
        path.windows(2).map(|pair| (self.transit)(pair[0], pair[1])).sum()
    }

    /// Returns cumulative value at the end of the path if every cumul stays within bounds.
    pub fn checked_path_value(&self, path: &[RouteIndex]) -> Option<Distance> {
        if !self.is_within_bounds(0) {
            return None;
        }

        path.windows(2).try_fold(0, |cumul, pair| {
            let cumul = cumul + (self.transit)(pair[0], pair[1]);
            self.is_within_bounds(cumul).then_some(cumul)
        })
    }
}

/// Keeps everything needed to evaluate routes.
pub(super) struct SearchContext {
    pub manager: Arc<dyn IndexManager>,
    pub arc_cost: TransitCallback,
    pub dimensions: Vec<DimensionContext>,
}

impl SearchContext {
    pub fn new(manager: Arc<dyn IndexManager>, arc_cost: TransitCallback, dimensions: Vec<DimensionContext>) -> Self {
        Self { manager, arc_cost, dimensions }
    }

    pub fn vehicle_count(&self) -> usize {
        self.manager.vehicle_count()
    }

    pub fn arc(&self, from: RouteIndex, to: RouteIndex) -> Distance {
        (self.arc_cost)(from, to)
    }

    /// Returns indices of all nodes except the depot.
    pub fn customers(&self) -> Vec<RouteIndex> {
        let depot = self.manager.depot();

        (0..self.manager.node_count()).filter(|&node| node != depot).map(|node| self.manager.node_to_index(node)).collect()
    }

    /// Returns the route with explicit start and end indices.
    pub fn full_path(&self, vehicle: usize, route: &[RouteIndex]) -> Vec<RouteIndex> {
        once(self.manager.start_index(vehicle))
            .chain(route.iter().copied())
            .chain(once(self.manager.end_index(vehicle)))
            .collect()
    }

    pub fn is_feasible(&self, path: &[RouteIndex]) -> bool {
        self.dimensions.iter().all(|dimension| dimension.checked_path_value(path).is_some())
    }

    /// Returns objective value: total arc cost and span costs of all dimensions.
    pub fn objective(&self, routes: &Routes) -> Distance {
        let paths = routes.iter().enumerate().map(|(vehicle, route)| self.full_path(vehicle, route)).collect::<Vec<_>>();

        let arcs = paths.iter().flat_map(|path| path.windows(2)).map(|pair| self.arc(pair[0], pair[1])).sum::<Distance>();

        let spans = self
            .dimensions
            .iter()
            .map(|dimension| {
                let max_end = paths.iter().map(|path| dimension.path_value(path)).max().unwrap_or(0);
                dimension.span_coefficient * max_end
            })
            .sum::<Distance>();

        arcs + spans
    }

    /// Returns arc cost part of the objective.
    pub fn arc_objective(&self, routes: &Routes) -> Distance {
        routes
            .iter()
            .enumerate()
            .map(|(vehicle, route)| {
                self.full_path(vehicle, route).windows(2).map(|pair| self.arc(pair[0], pair[1])).sum::<Distance>()
            })
            .sum()
    }

    /// Returns nearest customers for each node (indexed by node) using arc cost as a measure.
    pub fn create_neighbours(&self, size: usize) -> Vec<Vec<RouteIndex>> {
        let customers = self.customers();

        (0..self.manager.node_count())
            .map(|node| {
                let from = self.manager.node_to_index(node);
                let mut candidates = customers
                    .iter()
                    .filter(|&&to| to != from)
                    .map(|&to| (self.arc(from, to), to))
                    .collect::<Vec<_>>();

                candidates.sort_unstable();
                candidates.truncate(size);

                candidates.into_iter().map(|(_, to)| to).collect()
            })
            .collect()
    }
}

/// Creates a search context over a distance matrix with an optional distance dimension.
#[cfg(test)]
pub(super) fn create_test_context(
    matrix: crate::models::DistanceMatrix,
    vehicle_count: usize,
    upper_bound: Option<Distance>,
) -> SearchContext {
    use super::RoutingIndexManager;

    let matrix = Arc::new(matrix);
    let manager: Arc<dyn IndexManager> =
        Arc::new(RoutingIndexManager::new(matrix.size(), vehicle_count, 0).expect("cannot create manager"));

    let arc_cost: TransitCallback = {
        let manager = manager.clone();
        Arc::new(move |from, to| matrix.distance(manager.index_to_node(from), manager.index_to_node(to)))
    };

    let dimensions = upper_bound
        .map(|upper_bound| DimensionContext { transit: arc_cost.clone(), lower_bound: 0, upper_bound, span_coefficient: 0 })
        .into_iter()
        .collect();

    SearchContext::new(manager, arc_cost, dimensions)
}
