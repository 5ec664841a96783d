//! Orchestrator configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use super::{Strategy, parse_strategies};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;
use tour_core::utils::GenericError;

/// Default time limit of the metaheuristic in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;
/// Default name of the route dimension.
pub const DEFAULT_DIMENSION_NAME: &str = "Dimension";
/// Default amount of vehicles for vehicle routing problem.
pub const DEFAULT_VEHICLE_COUNT: usize = 5;
/// Default coefficient applied to the maximum allowed route.
pub const DEFAULT_UPPER_LIMIT_COEFFICIENT: f64 = 0.8;

/// A configuration read from a json file. Every value is optional and overrides the default one.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Strategy names to run.
    pub strategies: Option<Vec<String>>,
    /// Time limit of the metaheuristic in seconds.
    pub time_limit: Option<u64>,
    /// Whether the engine logs search progress.
    pub log_search: Option<bool>,
    /// Vehicle routing settings.
    pub vrp: Option<VrpSettings>,
    /// Plot settings.
    pub plot: Option<PlotSettings>,
}

/// Vehicle routing settings of a json config.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VrpSettings {
    /// A name of the route dimension.
    pub dimension_name: Option<String>,
    /// Amount of vehicles.
    pub vehicles: Option<usize>,
    /// A coefficient applied to the maximum allowed route.
    pub upper_limit_coefficient: Option<f64>,
    /// A divisor applied to route values when they are reported.
    pub time_unit_scale: Option<u64>,
}

/// Plot settings of a json config.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlotSettings {
    /// An output directory of images.
    pub directory: Option<String>,
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
    /// A radius of point markers in pixels.
    pub marker_size: Option<u32>,
    /// A width of route lines in pixels.
    pub line_width: Option<u32>,
}

/// Settings shared by all orchestrators.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveConfig {
    /// A problem name used in reports and image names.
    pub problem_name: String,
    /// Strategies to run.
    pub strategies: BTreeSet<Strategy>,
    /// Time limit of the metaheuristic.
    pub time_limit: Duration,
    /// Whether the engine logs search progress.
    pub log_search: bool,
}

impl SolveConfig {
    /// Creates a new instance of `SolveConfig` with default settings.
    pub fn new(problem_name: &str) -> Self {
        Self {
            problem_name: problem_name.to_string(),
            strategies: [Strategy::GlobalCheapestArc].into_iter().collect(),
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            log_search: true,
        }
    }
}

/// Settings of vehicle routing problem orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub struct VrpConfig {
    /// A name of the route dimension.
    pub dimension_name: String,
    /// Amount of vehicles.
    pub vehicle_count: usize,
    /// A coefficient applied to the maximum allowed route.
    pub upper_limit_coefficient: f64,
    /// A divisor applied to route values when they are reported, e.g. `3600000` for values in
    /// milliseconds reported in hours.
    pub time_unit_scale: Option<u64>,
}

impl Default for VrpConfig {
    fn default() -> Self {
        Self {
            dimension_name: DEFAULT_DIMENSION_NAME.to_string(),
            vehicle_count: DEFAULT_VEHICLE_COUNT,
            upper_limit_coefficient: DEFAULT_UPPER_LIMIT_COEFFICIENT,
            time_unit_scale: None,
        }
    }
}

/// Settings of rendered images.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    /// An output directory of images.
    pub directory: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// A radius of point markers in pixels.
    pub marker_size: u32,
    /// A width of route lines in pixels.
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("."), width: 1024, height: 768, marker_size: 7, line_width: 2 }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates solve settings from config, missing values are taken from defaults.
pub fn create_solve_config(problem_name: &str, config: &Config) -> Result<SolveConfig, GenericError> {
    let defaults = SolveConfig::new(problem_name);

    let strategies = match &config.strategies {
        Some(names) => parse_strategies(names)?,
        None => defaults.strategies,
    };

    if strategies.is_empty() {
        return Err("at least one strategy should be specified".into());
    }

    if config.time_limit == Some(0) {
        return Err("time limit should be positive".into());
    }

    Ok(SolveConfig {
        problem_name: defaults.problem_name,
        strategies,
        time_limit: config.time_limit.map_or(defaults.time_limit, Duration::from_secs),
        log_search: config.log_search.unwrap_or(defaults.log_search),
    })
}

/// Creates vehicle routing settings from config, missing values are taken from defaults.
pub fn create_vrp_config(config: &Config) -> VrpConfig {
    let defaults = VrpConfig::default();
    let settings = config.vrp.clone().unwrap_or_default();

    VrpConfig {
        dimension_name: settings.dimension_name.unwrap_or(defaults.dimension_name),
        vehicle_count: settings.vehicles.unwrap_or(defaults.vehicle_count),
        upper_limit_coefficient: settings.upper_limit_coefficient.unwrap_or(defaults.upper_limit_coefficient),
        time_unit_scale: settings.time_unit_scale.or(defaults.time_unit_scale),
    }
}

/// Creates plot settings from config, missing values are taken from defaults.
pub fn create_plot_config(config: &Config) -> PlotConfig {
    let defaults = PlotConfig::default();
    let settings = config.plot.clone().unwrap_or_default();

    PlotConfig {
        directory: settings.directory.map_or(defaults.directory, PathBuf::from),
        width: settings.width.unwrap_or(defaults.width),
        height: settings.height.unwrap_or(defaults.height),
        marker_size: settings.marker_size.unwrap_or(defaults.marker_size),
        line_width: settings.line_width.unwrap_or(defaults.line_width),
    }
}
