/*!
 * sched-sim - Command-Line Entry Point
 *
 * Reads a JSON simulation request from a file or stdin, runs it through the
 * scheduling engine and prints the result as a text report or JSON.
 */

mod cli;

use clap::Parser;
use cli::{render_table, Args, Input, OutputFormat};
use cpu_sched_sim::{init_tracing, simulate_request, SimulationRequest};
use miette::{IntoDiagnostic, WrapErr};
use std::io::Read;
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let args = Args::parse();

    let raw = match args.input() {
        Input::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("Failed to read request from stdin")?;
            buf
        }
        Input::File(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read request from {}", path.display()))?,
    };

    let request = SimulationRequest::from_json(&raw)?;
    info!(
        policy = %request.policy,
        processes = request.processes.len(),
        "Running simulation"
    );

    let result = simulate_request(&request)?;

    match args.output_format() {
        OutputFormat::Table => print!("{}", render_table(&result)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
            println!("{}", json);
        }
    }

    Ok(())
}
