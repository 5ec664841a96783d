#[cfg(test)]
#[path = "../../tests/unit/tour/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};

/// A trait to read a reference tour: one 1-indexed node per line, return to the first node is implicit.
/// Reading stops at the end of input, at `EOF` or at `-1` line.
pub trait ReferenceTour {
    /// Reads a tour as 0-indexed nodes checking that every node is less than `node_count`.
    fn read_tour(self, node_count: usize) -> ReadResult<Vec<usize>>;
}

impl<R: Read> ReferenceTour for BufReader<R> {
    fn read_tour(self, node_count: usize) -> ReadResult<Vec<usize>> {
        read_tour(self, node_count)
    }
}

impl ReferenceTour for String {
    fn read_tour(self, node_count: usize) -> ReadResult<Vec<usize>> {
        read_tour(BufReader::new(self.as_bytes()), node_count)
    }
}

fn read_tour<R: Read>(mut reader: BufReader<R>, node_count: usize) -> ReadResult<Vec<usize>> {
    let mut buffer = String::new();
    let mut tour = Vec::new();
    let mut line_number = 0;

    while read_line(&mut reader, &mut buffer)? > 0 {
        line_number += 1;
        let line = buffer.trim();

        match line {
            "" => continue,
            "EOF" | "-1" => break,
            _ => {}
        }

        let node = parse_token(line, CoordinateEncoding::Int).map_err(|err| err.with_context(format!("line {line_number}")))?;

        if node < 1 || node as usize > node_count {
            return Err(ReadError::Format(format!(
                "line {line_number}: node {node} is out of range, expecting [1, {node_count}]"
            )));
        }

        tour.push(node as usize - 1);
    }

    if tour.is_empty() {
        return Err(ReadError::Format("reference tour is empty".to_string()));
    }

    Ok(tour)
}
