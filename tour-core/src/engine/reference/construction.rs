#[cfg(test)]
#[path = "../../../tests/unit/engine/reference/construction_test.rs"]
mod construction_test;

use super::context::{Routes, SearchContext};
use crate::engine::RouteIndex;
use crate::models::Distance;

/// Amount of nearest candidates per node used by the first greedy merge pass.
const CANDIDATE_ARCS: usize = 48;

/// Builds routes one by one: each route is extended with the cheapest arc from its last index
/// while dimension bounds allow it. Returns `None` when some nodes stay unrouted.
pub(super) fn path_cheapest_arc(context: &SearchContext) -> Option<Routes> {
    let manager = context.manager.as_ref();
    let customers = context.customers();
    let mut visited = vec![false; manager.index_count()];
    let mut remaining = customers.len();

    let routes = (0..context.vehicle_count())
        .map(|vehicle| {
            let (start, end) = (manager.start_index(vehicle), manager.end_index(vehicle));
            let mut cumuls = vec![0; context.dimensions.len()];
            let mut route = Vec::new();
            let mut last = start;

            while remaining > 0 {
                let next = customers
                    .iter()
                    .filter(|&&candidate| !visited[candidate])
                    .filter(|&&candidate| can_extend(context, &cumuls, last, candidate, end))
                    .map(|&candidate| (context.arc(last, candidate), candidate))
                    .min();

                let Some((_, next)) = next else { break };

                context.dimensions.iter().zip(cumuls.iter_mut()).for_each(|(dimension, cumul)| {
                    *cumul += (dimension.transit)(last, next);
                });

                visited[next] = true;
                remaining -= 1;
                route.push(next);
                last = next;
            }

            route
        })
        .collect::<Routes>();

    (remaining == 0).then_some(routes)
}

/// Merges path fragments by iterating over arcs in order of increasing cost, an arc is accepted
/// when it connects a fragment tail with another fragment head and the merged fragment still fits
/// dimension bounds when served from the depot. Fragments are then assigned to vehicles.
/// Returns `None` when there are more fragments than vehicles.
pub(super) fn global_cheapest_arc(context: &SearchContext) -> Option<Routes> {
    let customers = context.customers();
    let mut fragments = Fragments::new(context);

    let mut arcs = customers
        .iter()
        .flat_map(|&from| {
            let mut candidates = customers
                .iter()
                .filter(|&&to| to != from)
                .map(|&to| (context.arc(from, to), from, to))
                .collect::<Vec<_>>();
            candidates.sort_unstable();
            candidates.truncate(CANDIDATE_ARCS);

            candidates
        })
        .collect::<Vec<_>>();
    arcs.sort_unstable();
    fragments.merge(&arcs);

    // connect what is left using arcs between all remaining tails and heads
    let heads = fragments.heads(&customers);
    let tails = customers.iter().copied().filter(|&index| fragments.succ[index].is_none()).collect::<Vec<_>>();
    let mut arcs = tails
        .iter()
        .flat_map(|&from| heads.iter().filter(move |&&to| to != from).map(move |&to| (from, to)))
        .map(|(from, to)| (context.arc(from, to), from, to))
        .collect::<Vec<_>>();
    arcs.sort_unstable();
    fragments.merge(&arcs);

    let heads = fragments.heads(&customers);
    if heads.len() > context.vehicle_count() {
        return None;
    }

    let mut routes = heads.into_iter().map(|head| fragments.collect(head)).collect::<Routes>();
    routes.resize(context.vehicle_count(), Vec::new());

    let is_feasible = routes
        .iter()
        .enumerate()
        .all(|(vehicle, route)| context.is_feasible(context.full_path(vehicle, route).as_slice()));

    is_feasible.then_some(routes)
}

fn can_extend(
    context: &SearchContext,
    cumuls: &[Distance],
    last: RouteIndex,
    candidate: RouteIndex,
    end: RouteIndex,
) -> bool {
    context.dimensions.iter().zip(cumuls.iter()).all(|(dimension, &cumul)| {
        let arrival = cumul + (dimension.transit)(last, candidate);
        let closing = arrival + (dimension.transit)(candidate, end);

        dimension.is_within_bounds(arrival) && dimension.is_within_bounds(closing)
    })
}

/// Keeps track of path fragments: links between indices and the opposite end of each fragment.
struct Fragments<'a> {
    context: &'a SearchContext,
    succ: Vec<Option<RouteIndex>>,
    pred: Vec<Option<RouteIndex>>,
    other_end: Vec<RouteIndex>,
    /// Dimension values of the fragment, valid at fragment heads only.
    lengths: Vec<Vec<Distance>>,
}

impl<'a> Fragments<'a> {
    fn new(context: &'a SearchContext) -> Self {
        let size = context.manager.index_count();

        Self {
            context,
            succ: vec![None; size],
            pred: vec![None; size],
            other_end: (0..size).collect(),
            lengths: vec![vec![0; context.dimensions.len()]; size],
        }
    }

    fn merge(&mut self, arcs: &[(Distance, RouteIndex, RouteIndex)]) {
        arcs.iter().for_each(|&(_, from, to)| {
            self.try_join(from, to);
        });
    }

    fn try_join(&mut self, from: RouteIndex, to: RouteIndex) -> bool {
        if self.succ[from].is_some() || self.pred[to].is_some() {
            return false;
        }

        // from is a tail and to is a head, the same fragment means a cycle
        let (head, tail) = (self.other_end[from], self.other_end[to]);
        if head == to {
            return false;
        }

        let manager = self.context.manager.as_ref();
        let (start, end) = (manager.start_index(0), manager.end_index(0));

        let lengths = self
            .context
            .dimensions
            .iter()
            .enumerate()
            .map(|(idx, dimension)| {
                let length = self.lengths[head][idx] + (dimension.transit)(from, to) + self.lengths[to][idx];
                let total = (dimension.transit)(start, head) + length + (dimension.transit)(tail, end);

                dimension.is_within_bounds(total).then_some(length)
            })
            .collect::<Option<Vec<_>>>();

        let Some(lengths) = lengths else { return false };

        self.succ[from] = Some(to);
        self.pred[to] = Some(from);
        self.other_end[head] = tail;
        self.other_end[tail] = head;
        self.lengths[head] = lengths;

        true
    }

    fn heads(&self, customers: &[RouteIndex]) -> Vec<RouteIndex> {
        customers.iter().copied().filter(|&index| self.pred[index].is_none()).collect()
    }

    fn collect(&self, head: RouteIndex) -> Vec<RouteIndex> {
        std::iter::successors(Some(head), |&index| self.succ[index]).collect()
    }
}
