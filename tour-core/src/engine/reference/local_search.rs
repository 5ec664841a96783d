#[cfg(test)]
#[path = "../../../tests/unit/engine/reference/local_search_test.rs"]
mod local_search_test;

use super::context::{Routes, SearchContext};
use crate::engine::RouteIndex;
use crate::models::Distance;
use crate::utils::Quota;

/// An arc cost used to evaluate moves. Might differ from the model's arc cost, e.g. when penalties
/// are added by a metaheuristic.
pub(super) type ArcCost<'a> = &'a dyn Fn(RouteIndex, RouteIndex) -> Distance;

/// Applies improving relocate and 2-opt moves until a local optimum is reached or quota is over.
/// Returns amount of applied moves.
pub(super) fn descend(
    context: &SearchContext,
    routes: &mut Routes,
    cost: ArcCost,
    neighbours: &[Vec<RouteIndex>],
    quota: Option<&dyn Quota>,
) -> usize {
    let mut search = LocalSearch::new(context, cost, neighbours, routes);
    let mut moves = 0;

    while !quota.is_some_and(|quota| quota.is_reached()) {
        let Some(change) = search.find_improvement() else { break };

        search.apply(change);
        moves += 1;
    }

    *routes = search.into_routes();

    moves
}

/// New full paths of the changed routes.
type Change = Vec<(usize, Vec<RouteIndex>)>;

/// A route with prefix sums of arc costs in both directions, used for constant time evaluation.
struct RouteState {
    path: Vec<RouteIndex>,
    forward: Vec<Distance>,
    backward: Vec<Distance>,
    dimensions: Vec<(Vec<Distance>, Vec<Distance>)>,
}

impl RouteState {
    fn new(context: &SearchContext, cost: ArcCost, path: Vec<RouteIndex>) -> Self {
        let (forward, backward) = prefix_sums(&path, cost);
        let dimensions =
            context.dimensions.iter().map(|dimension| prefix_sums(&path, dimension.transit.as_ref())).collect();

        Self { path, forward, backward, dimensions }
    }

    fn dimension_end(&self, dimension: usize) -> Distance {
        self.dimensions[dimension].0.last().copied().unwrap_or(0)
    }
}

fn prefix_sums(path: &[RouteIndex], cost: ArcCost) -> (Vec<Distance>, Vec<Distance>) {
    let mut forward = Vec::with_capacity(path.len());
    let mut backward = Vec::with_capacity(path.len());
    forward.push(0);
    backward.push(0);

    path.windows(2).for_each(|pair| {
        forward.push(forward[forward.len() - 1] + cost(pair[0], pair[1]));
        backward.push(backward[backward.len() - 1] + cost(pair[1], pair[0]));
    });

    (forward, backward)
}

struct LocalSearch<'a> {
    context: &'a SearchContext,
    cost: ArcCost<'a>,
    neighbours: &'a [Vec<RouteIndex>],
    states: Vec<RouteState>,
    positions: Vec<Option<(usize, usize)>>,
}

impl<'a> LocalSearch<'a> {
    fn new(context: &'a SearchContext, cost: ArcCost<'a>, neighbours: &'a [Vec<RouteIndex>], routes: &Routes) -> Self {
        let states = routes
            .iter()
            .enumerate()
            .map(|(vehicle, route)| RouteState::new(context, cost, context.full_path(vehicle, route)))
            .collect();

        let mut search =
            Self { context, cost, neighbours, states, positions: vec![None; context.manager.index_count()] };
        (0..search.states.len()).for_each(|vehicle| search.update_positions(vehicle));

        search
    }

    fn into_routes(self) -> Routes {
        self.states.into_iter().map(|state| state.path[1..state.path.len() - 1].to_vec()).collect()
    }

    fn update_positions(&mut self, vehicle: usize) {
        let path = &self.states[vehicle].path;
        path.iter().enumerate().skip(1).take(path.len().saturating_sub(2)).for_each(|(position, &index)| {
            self.positions[index] = Some((vehicle, position));
        });
    }

    fn apply(&mut self, change: Change) {
        change.into_iter().for_each(|(vehicle, path)| {
            self.states[vehicle] = RouteState::new(self.context, self.cost, path);
            self.update_positions(vehicle);
        });
    }

    fn find_improvement(&self) -> Option<Change> {
        (0..self.states.len()).find_map(|vehicle| {
            (0..self.states[vehicle].path.len() - 1)
                .find_map(|position| self.find_relocate(vehicle, position).or_else(|| self.find_two_opt(vehicle, position)))
        })
    }

    /// Moves the index at `position` of `route` between two consecutive indices of any route.
    fn find_relocate(&self, route: usize, position: usize) -> Option<Change> {
        let path = &self.states[route].path;
        if position == 0 || position + 1 >= path.len() {
            return None;
        }

        let cost = self.cost;
        let (prev, index, next) = (path[position - 1], path[position], path[position + 1]);
        let removal = cost(prev, next) - cost(prev, index) - cost(index, next);

        let node = self.context.manager.index_to_node(index);
        let targets = self.neighbours[node]
            .iter()
            .filter_map(|&neighbour| self.positions[neighbour])
            .flat_map(|(other, at)| [(other, at), (other, at - 1)])
            .chain((0..self.states.len()).map(|other| (other, 0)));

        targets.filter(|&(other, at)| !(other == route && (at == position || at + 1 == position))).find_map(
            |(other, at)| {
                let other_path = &self.states[other].path;
                let (x, y) = (other_path[at], other_path[at + 1]);
                let delta = removal + cost(x, index) + cost(index, y) - cost(x, y);

                let ends = self
                    .context
                    .dimensions
                    .iter()
                    .enumerate()
                    .map(|(idx, dimension)| {
                        let transit = dimension.transit.as_ref();
                        let removal = transit(prev, next) - transit(prev, index) - transit(index, next);
                        let insertion = transit(x, index) + transit(index, y) - transit(x, y);

                        if other == route {
                            (self.states[route].dimension_end(idx) + removal + insertion, None)
                        } else {
                            (
                                self.states[route].dimension_end(idx) + removal,
                                Some(self.states[other].dimension_end(idx) + insertion),
                            )
                        }
                    })
                    .collect::<Vec<_>>();

                let route_ends = ends.iter().map(|(route_end, _)| *route_end).collect::<Vec<_>>();
                let mut changes = vec![(route, route_ends)];
                if other != route {
                    changes.push((other, ends.iter().map(|(_, other_end)| other_end.unwrap_or(0)).collect()));
                }

                if delta + self.evaluate_span(&changes)? >= 0 {
                    return None;
                }

                let change = if other == route {
                    let mut path = path.clone();
                    path.remove(position);
                    path.insert(if at < position { at + 1 } else { at }, index);
                    vec![(route, path)]
                } else {
                    let mut path = path.clone();
                    path.remove(position);
                    let mut other_path = other_path.clone();
                    other_path.insert(at + 1, index);
                    vec![(route, path), (other, other_path)]
                };

                self.is_feasible(&change).then_some(change)
            },
        )
    }

    /// Reverses a segment of the route which starts right after `position`.
    fn find_two_opt(&self, route: usize, position: usize) -> Option<Change> {
        let state = &self.states[route];
        let path = &state.path;
        let cost = self.cost;
        let first = position + 1;

        let node = self.context.manager.index_to_node(path[position]);
        self.neighbours[node]
            .iter()
            .filter_map(|&neighbour| self.positions[neighbour])
            .filter(|&(other, last)| other == route && last > first && last + 1 < path.len())
            .find_map(|(_, last)| {
                let old = cost(path[position], path[first]) + state.forward[last] - state.forward[first]
                    + cost(path[last], path[last + 1]);
                let new = cost(path[position], path[last]) + state.backward[last] - state.backward[first]
                    + cost(path[first], path[last + 1]);

                let ends = self
                    .context
                    .dimensions
                    .iter()
                    .enumerate()
                    .map(|(idx, dimension)| {
                        let transit = dimension.transit.as_ref();
                        let (forward, backward) = &state.dimensions[idx];
                        let old = transit(path[position], path[first]) + forward[last] - forward[first]
                            + transit(path[last], path[last + 1]);
                        let new = transit(path[position], path[last]) + backward[last] - backward[first]
                            + transit(path[first], path[last + 1]);

                        state.dimension_end(idx) + new - old
                    })
                    .collect::<Vec<_>>();

                if new - old + self.evaluate_span(&[(route, ends)])? >= 0 {
                    return None;
                }

                let mut path = path.clone();
                path[first..=last].reverse();
                let change = vec![(route, path)];

                self.is_feasible(&change).then_some(change)
            })
    }

    /// Returns span cost delta for the new dimension end values of the changed routes or `None`
    /// if some end value violates dimension bounds.
    fn evaluate_span(&self, changes: &[(usize, Vec<Distance>)]) -> Option<Distance> {
        self.context.dimensions.iter().enumerate().try_fold(0, |acc, (idx, dimension)| {
            if changes.iter().any(|(_, ends)| !dimension.is_within_bounds(ends[idx])) {
                return None;
            }

            if dimension.span_coefficient == 0 {
                return Some(acc);
            }

            let end_value = |vehicle: usize| {
                changes
                    .iter()
                    .find(|(changed, _)| *changed == vehicle)
                    .map_or_else(|| self.states[vehicle].dimension_end(idx), |(_, ends)| ends[idx])
            };

            let old_max = (0..self.states.len()).map(|vehicle| self.states[vehicle].dimension_end(idx)).max()?;
            let new_max = (0..self.states.len()).map(end_value).max()?;

            Some(acc + dimension.span_coefficient * (new_max - old_max))
        })
    }

    fn is_feasible(&self, change: &Change) -> bool {
        change.iter().all(|(_, path)| self.context.is_feasible(path))
    }
}
