//! hiolreport CLI - Host I/O Limit report per storage group

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use hiolreport::{report, Config, OutputFormat, SymcliAdapter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hiolreport")]
#[command(about = "Reports Host IO Limit information per Symmetrix storage group")]
#[command(version)]
#[command(after_help = r#"ENVIRONMENT:
  SYMCLI_BIN   Directory holding symsg (default: /opt/emc/SYMCLI/bin, then PATH)
  RUST_LOG     Log filter for diagnostics on stderr (default: warn)

EXAMPLES:
  hiolreport -sid 000197800123
  hiolreport -sid 000197800123 -csv > hiol.csv"#)]
struct Cli {
    /// Symmetrix serial number
    #[arg(long, value_name = "SID", help_heading = "Required arguments")]
    sid: String,

    /// Output in CSV format
    #[arg(long, help_heading = "Additional optional arguments")]
    csv: bool,
}

/// Accepts the single-dash `-sid` and `-csv` spellings used by SYMCLI tools.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-sid") => OsString::from("--sid"),
            Some("-csv") => OsString::from("--csv"),
            _ => arg,
        })
        .collect()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging();

    let adapter = SymcliAdapter::new(Config::from_env());
    let format = OutputFormat::from_csv_flag(cli.csv);

    let mut stdout = std::io::stdout().lock();
    report::run(&adapter, &cli.sid, format, &mut stdout)
        .with_context(|| format!("failed to report host IO limits for array {}", cli.sid))?;

    Ok(())
}
