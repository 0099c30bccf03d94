//! Bartender server binary.
//! Run with: cargo run --bin bartender-server

use std::process::ExitCode;

use bartender_agent::start_bartender_agent;

fn main() -> ExitCode {
    start_bartender_agent::run()
}
