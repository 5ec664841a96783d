#[path = "../../../tour-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use tour_core::models::{Coordinate, PointSet};

pub fn get_test_resource(resource_path: &str) -> std::io::Result<File> {
    let mut path = std::env::current_dir()?;
    path.push("tests");
    path.push(resource_path);

    File::open(path)
}

/// Returns a coordinate-only problem definition with the given points, indices are 1-based.
pub fn create_tsplib_content(points: &[(Coordinate, Coordinate)]) -> String {
    points.iter().enumerate().map(|(idx, (x, y))| format!("{} {x} {y}\n", idx + 1)).collect()
}

pub fn create_random_points(size: usize, max: Coordinate, seed: u64) -> PointSet {
    let mut random = SmallRng::seed_from_u64(seed);

    PointSet::new((0..size).map(|_| (random.gen_range(-max..=max), random.gen_range(-max..=max))).collect())
}
