use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use print_queue_system::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "print_queue",
    about = "Submit print jobs and print them in priority order",
    version,
    long_about = None
)]
struct Cli {
    /// Read jobs from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Length of one print time unit in milliseconds
    #[arg(long, default_value = "1000")]
    time_unit_ms: u64,

    /// Output format for progress events
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Do not print queue snapshots
    #[arg(long)]
    no_snapshots: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let input: Box<dyn BufRead + Send> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let sink: Arc<dyn EventSink> = match cli.format {
        OutputFormat::Text => Arc::new(ConsoleSink::stdout()),
        OutputFormat::Json => Arc::new(JsonLinesSink::stdout()),
    };

    let config = PipelineConfig::new()
        .with_time_unit(Duration::from_millis(cli.time_unit_ms))
        .with_snapshots(!cli.no_snapshots);

    let pipeline = PrintPipeline::with_sink(config, sink)?;
    let summary = pipeline.start(input)?.join()?;

    log::info!(
        "done: {} submitted, {} rejected, {} printed",
        summary.submission.accepted.len(),
        summary.submission.rejected.len(),
        summary.printing.printed.len()
    );
    Ok(())
}
