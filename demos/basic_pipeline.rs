//! Basic print pipeline example
//!
//! Submits a handful of jobs, one more than the submission log holds, and
//! prints them in priority order with a short time unit.
//!
//! Run with: cargo run --example basic_pipeline

use print_queue_system::prelude::*;
use std::io::Cursor;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Print Queue System - Basic Pipeline Example ===");

    // job_id pages category priority
    let mut input = String::from("11\n");
    for id in 1..=11 {
        let pages = (id * 5) % 9 + 1;
        let category = id % 3 + 1;
        let priority = (id * 7) % 4;
        input.push_str(&format!("{} {} {} {}\n", id, pages, category, priority));
    }

    let config = PipelineConfig::new().with_time_unit(Duration::from_millis(50));
    let pipeline = PrintPipeline::new(config)?;

    let running = pipeline.start(Cursor::new(input))?;
    let stats = running.print_stats();
    let summary = running.join()?;

    println!("\n=== Summary ===");
    println!("   Jobs accepted: {}", summary.submission.accepted.len());
    println!("   Jobs rejected: {}", summary.submission.rejected.len());
    println!("   Print order:   {:?}", summary.printing.job_ids());
    println!("   Pages printed: {}", stats.get_pages_printed());
    println!(
        "   Avg print time: {:.2}ms",
        stats.get_average_print_time_us() / 1000.0
    );

    Ok(())
}
