//! Plain-text rendering of display tables.

use std::fmt;

use super::extract::DisplayTable;

const COLUMN_GAP: &str = "  ";

impl fmt::Display for DisplayTable {
    /// Right-aligned columns under a header row, one line per stats row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table();
        let cells: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                cells
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_line(f, table.columns().iter().map(String::as_str), &widths)?;
        for row in &cells {
            writeln!(f)?;
            write_line(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            f.write_str(COLUMN_GAP)?;
        }
        write!(f, "{cell:>width$}")?;
    }
    Ok(())
}
