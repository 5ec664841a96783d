//! This module reimports commonly used types.

pub use crate::engine::{
    CallbackId, Dimension, FirstSolutionStrategy, IndexManager, LocalSearchMetaheuristic, RouteIndex, RoutingEngine,
    RoutingModel, RoutingSolution, SearchParameters, TransitCallback,
};
pub use crate::models::{Coordinate, Distance, DistanceMatrix, PointSet, RouteBound, RoutingProblem};
pub use crate::utils::{GenericError, GenericResult, InfoLogger, Quota, TimeQuota, Timer};
