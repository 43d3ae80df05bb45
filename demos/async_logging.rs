//! Asynchronous logging example
//!
//! Demonstrates the background writer: several threads log concurrently
//! while one consumer renders and writes every line in order.
//!
//! Run with: cargo run --example async_logging

use console_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== Console Logger - Async Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .async_bounded(1024)
            .overflow_policy(OverflowPolicy::Block)
            .build(),
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for job in 0..25 {
                    logger.info("worker {} finished job {}", &[&worker, &job]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| LoggerError::other("worker thread panicked"))?;
    }
    let elapsed = start.elapsed();

    let mut logger = Arc::try_unwrap(logger)
        .map_err(|_| LoggerError::other("logger still shared"))?;
    logger.shutdown()?;

    let metrics = logger.metrics();
    println!("\nSubmitted 100 records in {:?}", elapsed);
    println!("  written: {}", metrics.lines_written());
    println!("  queue full events: {}", metrics.queue_full_events());
    println!("  dropped: {}", metrics.dropped_count());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
