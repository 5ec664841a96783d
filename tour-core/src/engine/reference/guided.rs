use super::context::{Routes, SearchContext};
use super::local_search::descend;
use crate::engine::RouteIndex;
use crate::models::Distance;
use crate::utils::{InfoLogger, Quota, Timer};
use rustc_hash::FxHashMap;

/// Amount of penalization rounds when the search has no time limit.
const DEFAULT_ROUNDS: usize = 100;

/// A fraction of an average arc cost used as penalty weight.
const LAMBDA_COEFFICIENT: f64 = 0.1;

/// Runs guided local search: every time the search is stuck in a local optimum, arcs with the
/// highest utility `cost / (1 + penalty)` get penalized and the search continues on the augmented
/// cost. Returns the best found routes evaluated on the real objective.
pub(super) fn search(
    context: &SearchContext,
    routes: Routes,
    neighbours: &[Vec<RouteIndex>],
    quota: Option<&dyn Quota>,
    logger: Option<&InfoLogger>,
) -> Routes {
    let timer = Timer::start();
    let mut current = routes;
    descend(context, &mut current, context.arc_cost.as_ref(), neighbours, quota);

    let mut best_cost = context.objective(&current);
    let mut best = current.clone();

    let arc_count = current.iter().map(|route| route.len() + 1).sum::<usize>().max(1);
    let lambda = ((LAMBDA_COEFFICIENT * context.arc_objective(&current) as f64 / arc_count as f64).round() as Distance)
        .max(1);

    if let Some(logger) = logger {
        (logger)(format!("[{}ms] local optimum {best_cost}, penalty weight {lambda}", timer.elapsed_millis()).as_str());
    }

    let mut penalties = Penalties::default();
    let mut round = 0;

    loop {
        let is_done = match quota {
            Some(quota) => quota.is_reached(),
            None => round >= DEFAULT_ROUNDS,
        };

        if is_done {
            break;
        }

        round += 1;
        penalties.penalize(context, &current);

        let augmented = |from: RouteIndex, to: RouteIndex| context.arc(from, to) + lambda * penalties.get(context, from, to);
        descend(context, &mut current, &augmented, neighbours, quota);

        let cost = context.objective(&current);
        if cost < best_cost {
            best_cost = cost;
            best = current.clone();

            if let Some(logger) = logger {
                (logger)(format!("[{}ms] round {round}: new best {best_cost}", timer.elapsed_millis()).as_str());
            }
        }
    }

    if let Some(logger) = logger {
        (logger)(format!("[{}ms] guided local search stopped after {round} rounds", timer.elapsed_millis()).as_str());
    }

    best
}

/// Arc penalties keyed by node pairs.
#[derive(Default)]
struct Penalties {
    values: FxHashMap<(usize, usize), Distance>,
}

impl Penalties {
    fn get(&self, context: &SearchContext, from: RouteIndex, to: RouteIndex) -> Distance {
        let manager = context.manager.as_ref();

        self.values.get(&(manager.index_to_node(from), manager.index_to_node(to))).copied().unwrap_or(0)
    }

    fn penalize(&mut self, context: &SearchContext, routes: &Routes) {
        let arcs = routes
            .iter()
            .enumerate()
            .flat_map(|(vehicle, route)| {
                let path = context.full_path(vehicle, route);
                path.windows(2).map(|pair| (pair[0], pair[1])).collect::<Vec<_>>()
            })
            .map(|(from, to)| {
                let utility = context.arc(from, to) as f64 / (1 + self.get(context, from, to)) as f64;
                (utility, from, to)
            })
            .collect::<Vec<_>>();

        let max_utility = arcs.iter().map(|(utility, _, _)| *utility).fold(f64::MIN, f64::max);
        let manager = context.manager.as_ref();

        arcs.iter().filter(|(utility, _, _)| *utility >= max_utility).for_each(|&(_, from, to)| {
            *self.values.entry((manager.index_to_node(from), manager.index_to_node(to))).or_insert(0) += 1;
        });
    }
}
