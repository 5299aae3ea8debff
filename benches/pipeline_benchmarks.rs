use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use print_queue_system::core::{Category, PrintJob, MAX_JOBS};
use print_queue_system::prelude::*;
use print_queue_system::queue::ReadyQueue;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

fn full_queue() -> ReadyQueue {
    let mut queue = ReadyQueue::new();
    for id in 0..MAX_JOBS as i32 {
        let priority = (id * 7) % 5;
        let pages = (id * 13) % 11;
        queue
            .push(PrintJob::new(id, pages, Category::Newspaper, priority))
            .expect("Failed to push job");
    }
    queue.push_sentinel().expect("Failed to push sentinel");
    queue
}

fn benchmark_ready_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("ready_queue");

    group.bench_function("sort_full", |b| {
        b.iter_batched(
            full_queue,
            |mut queue| {
                queue.sort();
                black_box(queue)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drain_full", |b| {
        b.iter_batched(
            full_queue,
            |mut queue| loop {
                queue.sort();
                if queue.is_drained_sentinel_only() {
                    break;
                }
                black_box(queue.pop_front());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut input = format!("{}\n", MAX_JOBS + 2);
    for id in 0..MAX_JOBS as i32 + 2 {
        input.push_str(&format!("{} {} {} {}\n", id, id % 9, id % 3 + 1, (id * 3) % 4));
    }

    c.bench_function("pipeline_zero_time_unit", |b| {
        b.iter(|| {
            let config = PipelineConfig::new()
                .with_time_unit(Duration::ZERO)
                .with_snapshots(false);
            let pipeline =
                PrintPipeline::with_sink(config, Arc::new(NullSink)).expect("Failed to build pipeline");
            let summary = pipeline
                .start(Cursor::new(input.clone()))
                .expect("Failed to start pipeline")
                .join()
                .expect("Pipeline failed");
            black_box(summary)
        });
    });
}

criterion_group!(benches, benchmark_ready_queue, benchmark_pipeline);
criterion_main!(benches);
