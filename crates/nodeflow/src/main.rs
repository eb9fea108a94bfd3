//! # nodeflow
//!
//! Runs the fixed node pipeline (increment → double → square root) from the
//! seed `10` and prints a single line:
//!
//! ```text
//! Final output: 4.69041575982343
//! ```
//!
//! Logs go to stderr. `NODEFLOW_LOG` (or `RUST_LOG`) sets the filter and
//! `NODEFLOW_LOG_FORMAT=json` switches to JSON lines.

mod cli;

use anyhow::Result;
use clap::Parser;
use nodeflow_core::{ExecutionContext, PipelineRunner, Scalar};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_tracing();

    let cli = cli::Cli::parse();

    let result = run(&cli);
    match &result {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::error!("pipeline failed: {:#}", e),
    }
    std::process::exit(exit_code(&result));
}

fn exit_code(result: &Result<String>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn init_tracing() {
    let log_format = std::env::var("NODEFLOW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = EnvFilter::try_from_env("NODEFLOW_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "nodeflow=warn".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &cli::Cli) -> Result<String> {
    run_with(cli, &nodeflow_stages::default_pipeline(), nodeflow_stages::SEED)
}

fn run_with(cli: &cli::Cli, runner: &PipelineRunner, seed: Scalar) -> Result<String> {
    tracing::debug!(connection = ?cli.connection, "parsed arguments");

    let ctx = ExecutionContext::new();
    let report = runner.run(seed, &ctx)?;

    tracing::debug!(report = %serde_json::to_string(&report)?, "pipeline completed");
    Ok(report.summary_line())
}
