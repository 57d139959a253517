// src/csv.rs
use std::io::{self, Write};

use crate::course::Course;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole course list as delimited text.
/// `time` and `classroom` are comma-joined, so CSV output quotes them.
pub fn courses_to_string(courses: &[Course], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &Course::headers(), sep);
    }
    for c in courses {
        let _ = write_row(&mut buf, &c.to_row(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["월1,월2", "가303", "say \"hi\""]), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"월1,월2\",가303,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["월1,월2", "A101,B202"]), '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "월1,월2\tA101,B202\n");
    }
}
