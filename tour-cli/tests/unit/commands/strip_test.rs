use super::*;

#[test]
fn can_remove_every_occurrence_of_symbol() {
    let reader = BufReader::new("1 10.5 2.25\n2 .5 3.\n".as_bytes());
    let mut buffer = Vec::new();

    strip_char(reader, BufWriter::new(&mut buffer), '.').expect("cannot strip");

    assert_eq!(String::from_utf8(buffer).unwrap(), "1 105 225\n2 5 3\n");
}

#[test]
fn can_strip_file_into_output_file() {
    let directory = tempfile::tempdir().expect("cannot create temp dir");
    let input = directory.path().join("input.txt");
    let output = directory.path().join("output.txt");
    std::fs::write(&input, "a,b,c\n").unwrap();

    let matches = get_strip_app()
        .try_get_matches_from(vec![
            "strip",
            input.to_str().unwrap(),
            "--char",
            ",",
            "--out-result",
            output.to_str().unwrap(),
        ])
        .expect("cannot parse arguments");

    run_strip(&matches, create_write_buffer).expect("cannot run strip");

    assert_eq!(std::fs::read_to_string(output).unwrap(), "abc\n");
}
