use super::*;
use crate::helpers::*;
use crate::tour::ReferenceTour;
use std::io::Write;
use tempfile::NamedTempFile;

fn get_data_path(resource: &str) -> std::path::PathBuf {
    let mut path = std::env::current_dir().expect("cannot get current dir");
    path.push("../data");
    path.push(resource);

    path
}

#[test]
fn can_build_coordinate_matrix_and_sum_known_tour() {
    let builder = MatrixBuilder::new(5, 5, MatrixFormat::Tsplib, CoordinateEncoding::Int);

    let data = builder.build(&get_data_path("tsplib/square5.txt")).expect("cannot build matrix");

    let tour = BufReader::new(File::open(get_data_path("tsplib/square5.opt.tour")).unwrap()).read_tour(5).unwrap();
    assert!(data.matrix.is_symmetric());
    assert_eq!(data.points.len(), 5);
    assert_eq!(data.route_bound, None);
    assert_eq!(data.matrix.tour_distance(&tour), 10 + 7 + 7 + 10 + 10);
}

#[test]
fn can_build_matrix_idempotently() {
    let builder = MatrixBuilder::new(5, 5, MatrixFormat::Tsplib, CoordinateEncoding::Float);
    let path = get_data_path("tsplib/square5_float.txt");

    let first = builder.build(&path).expect("cannot build matrix");
    let second = builder.build(&path).expect("cannot build matrix");

    assert_eq!(first, second);
}

#[test]
fn can_build_random_coordinate_matrix() {
    let points = create_random_points(60, 500, 7);
    let content = create_tsplib_content(&points.iter().collect::<Vec<_>>());
    let builder = MatrixBuilder::new(60, 60, MatrixFormat::Tsplib, CoordinateEncoding::Int);

    let data = builder.read(BufReader::new(content.as_bytes())).expect("cannot build matrix");

    assert_eq!(data.points, points);
    assert!(data.matrix.is_symmetric());
    assert_eq!(data.matrix, create_euclidean_matrix(&points).unwrap());
}

#[test]
fn can_build_sectioned_matrix() {
    let builder = MatrixBuilder::new(4, 4, MatrixFormat::Sectioned, CoordinateEncoding::Int);

    let data = builder.build(&get_data_path("sectioned/depot4.txt")).expect("cannot build matrix");

    assert_eq!(data.matrix.row(0), &[0, 10, 20, 10]);
    assert_eq!(data.matrix.distance(3, 1), 20);
    assert_eq!(data.points.len(), 4);
    assert_eq!(data.route_bound, Some(RouteBound::new(100)));
    assert_eq!(data.require_route_bound(), Ok(RouteBound::new(100)));
}

parameterized_test! {can_reject_invalid_shape, (rows, cols, format), {
    let builder = MatrixBuilder::new(rows, cols, format, CoordinateEncoding::Int);

    let result = builder.read(BufReader::new("1 0 0\n".as_bytes()));

    assert!(matches!(result, Err(ReadError::Format(_))));
}}

can_reject_invalid_shape! {
    case01_not_square: (2, 3, MatrixFormat::Tsplib),
    case02_empty: (0, 0, MatrixFormat::Sectioned),
    case03_points_mismatch: (2, 2, MatrixFormat::Tsplib),
}

#[test]
fn can_prefix_errors_with_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "1 0 0\n2 x 0\n").unwrap();
    let builder = MatrixBuilder::new(2, 2, MatrixFormat::Tsplib, CoordinateEncoding::Int);

    let result = builder.build(file.path());

    match result {
        Err(ReadError::Parse(msg)) => {
            assert!(msg.starts_with(&file.path().display().to_string()));
            assert!(msg.ends_with("line 2: cannot parse integer: 'x': invalid digit found in string"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn can_report_missing_file_as_io_error() {
    let builder = MatrixBuilder::new(2, 2, MatrixFormat::Tsplib, CoordinateEncoding::Int);

    let result = builder.build(&get_data_path("tsplib/missing.txt"));

    assert!(matches!(result, Err(ReadError::Io(_))));
}

#[test]
fn can_parse_format_names() {
    assert_eq!("tsplib".parse::<MatrixFormat>(), Ok(MatrixFormat::Tsplib));
    assert_eq!("SECTIONED".parse::<MatrixFormat>(), Ok(MatrixFormat::Sectioned));
    assert!("csv".parse::<MatrixFormat>().is_err());
}

parameterized_test! {can_reject_sectioned_table_breaking_matrix_invariant, (distances, expected), {
    let content = format!("EDGE_WEIGHT_SECTION\n{distances}\nDISPLAY_DATA_SECTION\n0 0 0\n1 1 1\n");
    let builder = MatrixBuilder::new(2, 2, MatrixFormat::Sectioned, CoordinateEncoding::Int);

    let result = builder.read(BufReader::new(content.as_bytes()));

    assert_eq!(result, Err(ReadError::Format(expected.to_string())));
}}

can_reject_sectioned_table_breaking_matrix_invariant! {
    case01_asymmetric: ("0\n3\n5\n0", "expecting symmetric edge weights, got [0][1] = 3 and [1][0] = 5"),
    case02_diagonal: ("7\n3\n5\n9", "expecting zero diagonal, got [0][0] = 7"),
    case03_last_diagonal: ("0\n3\n3\n9", "expecting zero diagonal, got [1][1] = 9"),
}
