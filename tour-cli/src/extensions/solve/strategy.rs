#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/strategy_test.rs"]
mod strategy_test;

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use tour_core::engine::{FirstSolutionStrategy, SearchParameters};
use tour_core::utils::GenericError;

/// A named solve strategy. Strategies are ordered canonically: first solution heuristics go first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Global cheapest arc first solution heuristic.
    GlobalCheapestArc,
    /// Path cheapest arc first solution heuristic.
    PathCheapestArc,
    /// Time limited guided local search metaheuristic.
    GuidedLocalSearch,
}

impl Strategy {
    /// Returns all strategies in canonical order.
    pub fn all() -> BTreeSet<Strategy> {
        [Strategy::GlobalCheapestArc, Strategy::PathCheapestArc, Strategy::GuidedLocalSearch].into_iter().collect()
    }

    /// Returns the strategy name as used in logs and file names.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::GlobalCheapestArc => "GLOBAL_CHEAPEST_ARC",
            Strategy::PathCheapestArc => "PATH_CHEAPEST_ARC",
            Strategy::GuidedLocalSearch => "GUIDED_LOCAL_SEARCH",
        }
    }

    /// Returns true if the strategy runs within a time limit.
    pub fn is_time_limited(&self) -> bool {
        matches!(self, Strategy::GuidedLocalSearch)
    }

    /// Creates search parameters of the strategy. The time limit and search logging apply to the
    /// metaheuristic only.
    pub fn create_search_parameters(&self, time_limit: Duration, log_search: bool) -> SearchParameters {
        match self {
            Strategy::GlobalCheapestArc => SearchParameters::with_first_solution(FirstSolutionStrategy::GlobalCheapestArc),
            Strategy::PathCheapestArc => SearchParameters::with_first_solution(FirstSolutionStrategy::PathCheapestArc),
            Strategy::GuidedLocalSearch => SearchParameters::with_guided_local_search(time_limit, log_search),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "GLOBAL_CHEAPEST_ARC" | "FIRST_ARC_GLOBAL" | "GLOBAL_ARC" => Ok(Strategy::GlobalCheapestArc),
            "PATH_CHEAPEST_ARC" | "FIRST_ARC_PATH" | "PATH_ARC" => Ok(Strategy::PathCheapestArc),
            "GUIDED_LOCAL_SEARCH" | "GLS" => Ok(Strategy::GuidedLocalSearch),
            _ => Err(format!("unknown strategy: '{value}'").into()),
        }
    }
}

/// Parses strategy names ignoring duplicates.
pub fn parse_strategies<T: AsRef<str>>(names: &[T]) -> Result<BTreeSet<Strategy>, GenericError> {
    names.iter().map(|name| name.as_ref().parse::<Strategy>()).collect()
}
