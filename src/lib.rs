//! DupeBench - Duplicate-Pair Search Benchmark
//!
//! Benchmarks four variants of an algorithm that locates the single
//! duplicate value pair inside an unsorted integer collection: three
//! sequential nested-loop scanners and a partitioned parallel search with
//! fan-out fallback. Each strategy is timed over repeated trials on freshly
//! generated inputs and the average wall-clock latency is reported.

pub mod cli;
pub mod error;
pub mod generate;
pub mod harness;
pub mod logging;
pub mod output;
pub mod search;
pub mod signal;

use cli::{Cli, OutputFormat};
use error::ExitCode;
use harness::BenchConfig;
use output::JsonReport;

/// Run the benchmark described by the parsed CLI arguments.
///
/// In text mode each strategy's report line is printed as soon as that
/// strategy finishes; in JSON mode the full run report is emitted at the
/// end.
///
/// # Errors
///
/// Returns any [`harness::BenchError`] raised by a strategy run, including
/// `Interrupted` when Ctrl+C stops the benchmark mid-run.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        yansi::disable();
    }

    let handler = signal::install_handler()?;

    let show_progress = !cli.quiet && cli.output == OutputFormat::Text;
    let config = BenchConfig::default()
        .with_iterations(cli.iterations)
        .with_length(cli.length)
        .with_fanout(cli.fanout)
        .with_seed(cli.seed)
        .with_clean(cli.clean)
        .with_shutdown_flag(handler.get_flag())
        .with_progress(show_progress);

    let strategies = cli.selected_strategies();
    log::info!(
        "benchmarking {} strategies: {} trials x {} elements (fan-out {})",
        strategies.len(),
        config.iterations,
        config.length,
        config.fanout
    );

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let report = harness::run_strategy(strategy, &config)?;
        if cli.output == OutputFormat::Text {
            println!("{}", output::text::render_line(&report));
        }
        reports.push(report);
    }

    let found_any = reports.iter().any(|r| r.duplicate.is_some());
    if cli.output == OutputFormat::Json {
        println!("{}", JsonReport::new(&config, reports).to_json_pretty()?);
    }

    Ok(if found_any {
        ExitCode::Success
    } else {
        ExitCode::NoDuplicates
    })
}
