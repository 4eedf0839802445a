//! Command dispatch for the two binaries.
//!
//! Both tools share the same lifecycle: install the log subscriber, parse
//! the positional arguments, run one operation, and let [`finish`] turn the
//! outcome into the process exit code.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::Error;

pub mod asymmetric;
pub mod symmetric;

/// Installs the stderr log subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_file(true).with_line_number(true).try_init();
}

/// Parses the command line, printing usage on failure.
pub fn parse<P: Parser>() -> Result<P, ExitCode> {
    parse_from(std::env::args_os())
}

/// Parses `args` (program name first), printing usage on failure.
///
/// `--help` and `--version` come back as `Err(ExitCode::SUCCESS)`; every
/// other parse error as `Err(ExitCode::FAILURE)`.
pub fn parse_from<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
    })
}

/// Single exit point: `0` on success, `1` on any failure.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = err.downcast_ref::<Error>().map(Error::kind);
            debug!(?kind, "command failed");
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
