//! CSV export for series records
//!
//! Output shape: one separator hint row for spreadsheet applications,
//! one header row, then one row per record. Fields containing the
//! delimiter, a quote, or a line break are quoted with doubled quotes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::SeriesRecord;

/// Spreadsheet separator hint, written as the first row
pub const SEPARATOR_HINT: &str = "sep=,";

/// Fixed header row, in export column order
pub const HEADER: [&str; 5] = ["Title", "Rating", "Genre", "Actors", "Runtime"];

/// Field delimiter
const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first {
            write!(w, "{SEP}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write the full export: hint row, header row, one row per record.
pub fn write_csv<W: Write>(w: &mut W, records: &[SeriesRecord]) -> io::Result<()> {
    write_row(w, &[SEPARATOR_HINT])?;
    write_row(w, &HEADER)?;
    for record in records {
        write_row(w, &record.csv_row())?;
    }
    Ok(())
}

/// Write the export to a file, replacing any existing content.
pub fn export_to_path(path: &Path, records: &[SeriesRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records)?;
    writer.flush()
}
