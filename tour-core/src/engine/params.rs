use std::time::Duration;

/// Specifies a heuristic used to construct the first solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FirstSolutionStrategy {
    /// Lets the engine decide.
    #[default]
    Automatic,
    /// Iteratively connects two nodes which produce the cheapest route segment.
    GlobalCheapestArc,
    /// Starting from a route start, connects it to the node with the cheapest arc and extends
    /// the route from the last added node.
    PathCheapestArc,
}

/// Specifies a local search metaheuristic used to improve the first solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocalSearchMetaheuristic {
    /// Lets the engine decide.
    #[default]
    Automatic,
    /// Accepts improving moves only and stops at the first local optimum.
    GreedyDescent,
    /// Escapes local optima by penalizing features of the current solution.
    GuidedLocalSearch,
}

/// Search parameters passed to the routing engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// First solution strategy.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Local search metaheuristic.
    pub local_search_metaheuristic: LocalSearchMetaheuristic,
    /// Wall-clock time limit of the search.
    pub time_limit: Option<Duration>,
    /// Whether search progress is logged.
    pub log_search: bool,
}

impl SearchParameters {
    /// Creates parameters which select the first solution strategy only.
    pub fn with_first_solution(strategy: FirstSolutionStrategy) -> Self {
        Self { first_solution_strategy: strategy, ..Self::default() }
    }

    /// Creates parameters which select guided local search within the time limit.
    pub fn with_guided_local_search(time_limit: Duration, log_search: bool) -> Self {
        Self {
            local_search_metaheuristic: LocalSearchMetaheuristic::GuidedLocalSearch,
            time_limit: Some(time_limit),
            log_search,
            ..Self::default()
        }
    }
}
