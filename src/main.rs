//! Stacking simulation runner (default binary).
//!
//! Reads configuration from flags and `TETRIS_STACK_*` variables, asks for
//! the step count when none was given, then plays the run back at a
//! human-readable pace. Logs go to stderr (`RUST_LOG`, default `warn`).

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_stack::cli::{Cli, Mode, ReportFormat};
use tetris_stack::engine::{Report, Simulation};
use tetris_stack::playback::Playback;
use tetris_stack::report::write_json_report;
use tetris_stack::term::{PlainRenderer, Renderer, TerminalRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let steps = cli.resolve_steps(io::stdin().lock(), io::stderr())?;

    let config = cli.simulation_config();
    let mut sim = match cli.seed {
        Some(seed) => Simulation::seeded(config, seed),
        None => Simulation::from_entropy(config),
    };
    info!(
        steps,
        width = config.width,
        height = config.height,
        seed = ?cli.seed,
        "starting simulation"
    );

    match cli.format {
        ReportFormat::Json => {
            write_json_report(&mut sim, steps, io::stdout().lock())?;
        }
        ReportFormat::Text => {
            let delay = Duration::from_millis(cli.delay_ms);
            if cli.mode == Mode::Live && io::stdout().is_terminal() {
                let mut term = TerminalRenderer::new();
                term.enter()?;
                let result = run_with(&mut sim, steps, &mut term, delay);
                // Always try to restore terminal state.
                let _ = term.exit();
                result?;
            } else {
                let mut plain = PlainRenderer::new(io::stdout());
                run_with(&mut sim, steps, &mut plain, delay)?;
            }
        }
    }

    Ok(())
}

fn run_with(
    sim: &mut Simulation,
    steps: u32,
    renderer: &mut dyn Renderer,
    delay: Duration,
) -> Result<Report> {
    let mut playback = Playback::new(renderer, delay);
    sim.run(steps, &mut playback)
}
