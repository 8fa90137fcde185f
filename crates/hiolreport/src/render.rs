//! Aligned-table and CSV rendering of report rows.

use crate::error::{Error, Result};

/// One report row. `None` cells print as `None`.
pub type Row<'a> = Vec<Option<&'a str>>;

pub const NULL_TEXT: &str = "None";

pub const COLUMN_GAP: &str = "   ";

fn cell_text(cell: Option<&str>) -> &str {
    cell.unwrap_or(NULL_TEXT)
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Renders rows as left-aligned columns separated by three spaces.
///
/// Column widths are the widest cell seen at each position across the header
/// and every row. Rows may be ragged: a longer row adds columns, a shorter
/// row just prints fewer cells. Every line ends with a newline. The last cell
/// of a line is written without padding.
pub fn render_table(rows: &[Row<'_>], header: Option<&[&str]>) -> String {
    let widths = column_widths(rows, header);

    let mut out = String::new();
    if let Some(header) = header {
        push_line(&mut out, header.iter().copied(), &widths);
    }
    for row in rows {
        push_line(&mut out, row.iter().map(|cell| cell_text(*cell)), &widths);
    }
    out
}

fn column_widths(rows: &[Row<'_>], header: Option<&[&str]>) -> Vec<usize> {
    let mut widths: Vec<usize> = header
        .map(|h| h.iter().map(|c| display_width(c)).collect())
        .unwrap_or_default();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let width = display_width(cell_text(*cell));
            match widths.get_mut(i) {
                Some(max) => *max = (*max).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut cells = cells.zip(widths).peekable();
    while let Some((cell, width)) = cells.next() {
        if cells.peek().is_some() {
            out.push_str(&format!("{:<width$}", cell, width = *width));
            out.push_str(COLUMN_GAP);
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Renders a header line and one comma-joined line per row.
///
/// Values are written verbatim: nothing is quoted or escaped, so a value
/// containing a comma produces an extra column. Lines may differ in length.
pub fn render_csv(header: &[&str], rows: &[Row<'_>]) -> Result<String> {
    let mut out = Vec::new();

    write_csv_line(&mut out, header.to_vec())?;
    for row in rows {
        write_csv_line(&mut out, row.iter().map(|cell| cell_text(*cell)).collect())?;
    }

    String::from_utf8(out).map_err(|e| Error::Render(e.to_string()))
}

fn write_csv_line(out: &mut Vec<u8>, cells: Vec<&str>) -> Result<()> {
    // csv writes `""` for an empty line so it reads back as one field; a
    // plain join gives an empty line.
    if cells.is_empty() || cells == [""] {
        out.push(b'\n');
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut *out);
    writer.write_record(&cells).map_err(csv_error)?;
    writer.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> Error {
    Error::Render(e.to_string())
}
