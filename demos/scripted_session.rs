//! Scripted Calculator Session
//!
//! This example drives a session from a button script and draws every
//! frame to stdout as plain text.
//!
//! Key concepts:
//! - Pure engine behind an imperative session shell
//! - Left-to-right chaining without precedence
//! - Errors that persist until all-clear
//! - Highlight pulse expiring on refresh
//!
//! Run with: cargo run --example scripted_session
//! Set `RUST_LOG=chaincalc=debug` to see the applied events on stderr.

use chaincalc::config::ConfigBuilder;
use chaincalc::display::TextDisplay;
use chaincalc::input::{parse_script, KEYPAD};
use chaincalc::Session;
use tracing_subscriber::EnvFilter;

const SCRIPT: &str = "7 + 3 × 2 = ± ⌫ 5 . 2 5 ÷ 0 = AC 1 2 3 4 5 6 7 − 7 =";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chaincalc=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Scripted Calculator Session ===\n");
    println!("Keypad:");
    for row in KEYPAD {
        println!("  {}", row.join(" "));
    }
    println!("\nScript: {SCRIPT}\n");

    let config = ConfigBuilder::new().history_limit(16).build()?;
    let mut session = Session::new(config, TextDisplay::new(std::io::stdout()))?;
    session.start()?;

    for event in parse_script(SCRIPT)? {
        println!("--- {}", event.label());
        session.dispatch(event)?;
    }

    // Draw once more after the last highlight has run out.
    if let Some(deadline) = session.pulse_deadline() {
        println!("--- (pulse expired)");
        session.refresh_at(deadline)?;
    }

    println!("\nFinal state: {:?}", session.current_state());
    println!("Recorded transitions: {}", session.history().len());
    if let Some(elapsed) = session.history().duration() {
        println!("Session span: {}ms", elapsed.as_millis());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
