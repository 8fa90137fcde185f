//! Report driver: query, extract, render, write.

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::extract::{extract, GroupMap};
use crate::render::{render_csv, render_table, Row};
use crate::symcli::StructuredQuery;

pub const HEADER: [&str; 4] = ["SGName", "HIOL_Status", "IOPS", "MB/sec"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl OutputFormat {
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv {
            Self::Csv
        } else {
            Self::Table
        }
    }
}

/// Renders one row per storage group in map order.
pub fn render_report(groups: &GroupMap, format: OutputFormat) -> Result<String> {
    let rows: Vec<Row<'_>> = groups.values().map(|g| g.row()).collect();

    match format {
        OutputFormat::Table => Ok(render_table(&rows, Some(&HEADER[..]))),
        OutputFormat::Csv => render_csv(&HEADER, &rows),
    }
}

/// Produces the report for array `sid` and writes it to `out`.
///
/// The whole report is rendered before anything is written, so a failure in
/// any stage leaves `out` untouched.
pub fn run<Q, W>(source: &Q, sid: &str, format: OutputFormat, out: &mut W) -> Result<()>
where
    Q: StructuredQuery + ?Sized,
    W: Write + ?Sized,
{
    let doc = source.fetch(sid)?;
    let groups = extract(&doc)?;
    let report = render_report(&groups, format)?;

    info!(sid, groups = groups.len(), ?format, "rendered host IO limit report");
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
