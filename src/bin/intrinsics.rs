//! Prints every hardware-intrinsics capability group in the host catalog,
//! whether this machine supports it, and the operations it exposes.
//!
//! With no arguments the binary performs one scan and writes the text report
//! to stdout. Logs go to stderr so the report can be piped.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use intrinsics::{
    DEFAULT_CAPABILITY_PREFIX, GroupOrder, LogConfig, LogFormat, LogLevel, RenderOptions,
    ReportFormat, ScanOptions, host_modules, init_logging, render_report, scan_with,
};
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_config()).context("installing log subscriber")?;

    let scan_options = cli.scan_options();
    let modules = host_modules();
    let groups =
        scan_with(&modules, &scan_options).context("scanning host capability catalog")?;

    let supported = groups.iter().filter(|group| group.is_supported).count();
    info!(
        modules = modules.len(),
        groups = groups.len(),
        supported,
        prefix = %scan_options.prefix,
        "capability scan complete"
    );

    let mut output = String::new();
    render_report(
        &groups,
        &scan_options.prefix,
        &cli.render_options(),
        &mut output,
    )?;
    print!("{}", output);
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "intrinsics",
    version,
    about = "List hardware-intrinsics capability groups and whether this host supports them."
)]
struct Cli {
    /// Output layout.
    #[arg(long, value_enum, env = "INTRINSICS_FORMAT", default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Print operation names without parameter and return descriptors.
    #[arg(long)]
    names_only: bool,

    /// Omit groups this host does not support.
    #[arg(long)]
    supported_only: bool,

    /// Order groups by name instead of declaration order.
    #[arg(long)]
    sort: bool,

    /// Namespace prefix that marks a type as a capability group.
    #[arg(long, env = "INTRINSICS_PREFIX", default_value = DEFAULT_CAPABILITY_PREFIX)]
    prefix: String,

    /// Log line format on stderr.
    #[arg(long, value_enum, env = "INTRINSICS_LOG_FORMAT", default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reduce logging (-q errors only, -qq nothing, even with INTRINSICS_LOG or RUST_LOG set).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            level: LogLevel::from_verbosity(self.verbose, self.quiet),
        }
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            prefix: self.prefix.clone(),
            order: if self.sort {
                GroupOrder::ByName
            } else {
                GroupOrder::Declared
            },
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            names_only: self.names_only,
            supported_only: self.supported_only,
        }
    }
}
