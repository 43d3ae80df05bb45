//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the console at every level, with
//! both placeholder modes and a custom color scheme.
//!
//! Run with: cargo run --example basic_usage

use console_logger::prelude::*;
use console_logger::{error, info};

fn main() -> Result<()> {
    println!("=== Console Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);

    println!("\n2. Sequential placeholders:");
    logger.info("Processed {} of {} items ({}%)", &[&42, &100, &42.0_f64]);
    logger.warn("Only {} argument for {} placeholders {}", &[&1]);

    println!("\n3. Call sites:");
    info!(logger, "Macros record where they were called from");
    error!(logger, "Connection to {} refused", "db-01");

    println!("\n4. Addresses:");
    let value = 7_u64;
    logger.debug("value lives at {}", &[&(&value as *const u64)]);

    println!("\n5. Indexed placeholders and a custom scheme:");
    let indexed = Logger::builder()
        .placeholder_mode(PlaceholderMode::Indexed)
        .hex_case(HexCase::Upper)
        .scheme(
            LogLevel::Info,
            ColorScheme::new(TermColor::White, TermColor::Green, TermColor::BrightWhite),
        )
        .build();
    indexed.info("{1} says hello to {0}; {0} waves back", &[&"Bob", &"Alice"]);
    indexed.info("named placeholders are not supported: {user}", &[]);

    println!("\n6. Without colors:");
    let plain = Logger::builder().color_choice(ColorChoice::Never).build();
    plain.info("plain text for log files and pipes", &[]);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
