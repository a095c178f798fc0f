//! Binary crate for the `forecast` command-line dashboard.
//!
//! This crate focuses on:
//! - The CLI surface and pipeline orchestration
//! - The interactive dashboard menu
//! - Chart rendering (terminal + PNG)

use std::process::ExitCode;

mod ascii;
mod charts;
mod cli;
mod dashboard;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
