//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cert_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the domain list from `-d` or stdin
//! - Printing the status line and exiting with the status code
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use structopt::StructOpt;

use cert_status::app::{json_report, parse_domains, read_domains, status_line};
use cert_status::initialization::{init_logger_with, level_for};
use cert_status::{run_check, Config, DiagnosticSink, LogSink, NoopSink, Opt, Severity};

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    match run(opt).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("cert_status error: {:#}", e);
            process::exit(Severity::Unknown.exit_code());
        }
    }
}

async fn run(opt: Opt) -> Result<i32> {
    init_logger_with(level_for(opt.debug), opt.log_format)
        .context("Failed to initialize logger")?;

    let domains = match &opt.domains {
        Some(hosts) => parse_domains(hosts),
        None => read_domains(tokio::io::stdin())
            .await
            .context("Failed to read domains from stdin")?,
    };

    let sink: Arc<dyn DiagnosticSink> = if opt.debug {
        Arc::new(LogSink)
    } else {
        Arc::new(NoopSink)
    };

    let config = Config::from(&opt);
    let summary = run_check(&config, domains, sink)
        .await
        .context("Certificate check did not complete")?;

    if opt.json {
        println!("{}", json_report(&summary)?);
    } else {
        println!("{}", status_line(&summary));
    }

    Ok(summary.exit_code())
}
