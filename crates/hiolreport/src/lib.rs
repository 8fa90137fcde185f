//! # hiolreport
//!
//! Reports Host I/O Limit settings for every storage group on a Symmetrix
//! array.
//!
//! The report is produced in three stages:
//!
//! 1. [`SymcliAdapter`] runs `symsg list -v -output xml_e` and parses the XML
//!    into an [`Element`] tree.
//! 2. [`extract`] turns the `SG` elements into [`GroupRecord`]s keyed by name.
//! 3. [`render_table`] or [`render_csv`] formats the records.
//!
//! [`report::run`] wires the stages together.
//!
//! ```no_run
//! use hiolreport::{report, Config, OutputFormat, SymcliAdapter};
//!
//! fn main() -> hiolreport::Result<()> {
//!     let adapter = SymcliAdapter::new(Config::from_env());
//!     report::run(&adapter, "000197800123", OutputFormat::Csv, &mut std::io::stdout())
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod render;
pub mod report;
pub mod symcli;

pub use config::Config;
pub use document::Element;
pub use error::{Error, Result};
pub use extract::{extract, GroupMap, GroupRecord};
pub use render::{render_csv, render_table, Row};
pub use report::OutputFormat;
pub use symcli::{StructuredQuery, SymcliAdapter};
