use super::*;

#[test]
fn can_write_matrix_table_into_file() {
    let directory = tempfile::tempdir().expect("cannot create temp dir");
    let output = directory.path().join("matrix.txt");

    let matches = get_matrix_app()
        .try_get_matches_from(vec![
            "matrix",
            "../data/sectioned/depot4.txt",
            "--rows",
            "4",
            "--format",
            "sectioned",
            "-o",
            output.to_str().unwrap(),
        ])
        .expect("cannot parse arguments");

    run_matrix(&matches, create_write_buffer).expect("cannot run matrix");

    let content = std::fs::read_to_string(output).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.lines().next().unwrap().split_whitespace().eq(["0", "10", "20", "10"]));
}

#[test]
fn can_report_shape_mismatch() {
    let matches = get_matrix_app()
        .try_get_matches_from(vec!["matrix", "../data/tsplib/square5.txt", "--rows", "4"])
        .expect("cannot parse arguments");

    let result = run_matrix(&matches, create_write_buffer);

    assert!(result.is_err_and(|err| err.contains("expecting 4 points, got 5")));
}

#[test]
fn can_reject_non_square_shape() {
    let matches = get_matrix_app()
        .try_get_matches_from(vec!["matrix", "../data/tsplib/square5.txt", "--rows", "5", "--cols", "4"])
        .expect("cannot parse arguments");

    assert!(run_matrix(&matches, create_write_buffer).is_err());
}
