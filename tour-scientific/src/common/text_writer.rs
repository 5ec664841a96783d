#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use std::io::{BufWriter, Error, Write};
use tour_core::models::DistanceMatrix;

/// Writes the matrix as a table: cells are separated by tabs and padded to the widest cell of
/// their column.
pub fn write_matrix_table<W: Write>(writer: BufWriter<W>, matrix: &DistanceMatrix) -> Result<(), Error> {
    let mut writer = writer;

    let cells = (0..matrix.size())
        .map(|row| matrix.row(row).iter().map(|value| value.to_string()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let widths = (0..matrix.size())
        .map(|column| cells.iter().map(|row| row[column].len()).max().unwrap_or(0))
        .collect::<Vec<_>>();

    cells.iter().try_for_each(|row| {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("\t");

        writeln!(writer, "{line}")
    })?;

    writer.flush()
}
