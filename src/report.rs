//! Machine-readable output for `--format json`.

use std::io::Write;

use anyhow::Result;

use crate::engine::{Headless, Report, Simulation};

/// Run without rendering and write the final report to `out` as one JSON line.
pub fn write_json_report<W: Write>(
    sim: &mut Simulation,
    steps: u32,
    mut out: W,
) -> Result<Report> {
    let report = sim.run(steps, &mut Headless)?;
    serde_json::to_writer(&mut out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, STEPS_PROMPT};

    #[test]
    fn json_stdout_holds_only_the_report() {
        let args = ["tetris-stack", "--format", "json", "--seed", "1"];
        let cli = Cli::try_parse_from(args).unwrap();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let steps = cli.resolve_steps(&b"5\n"[..], &mut stderr).unwrap();
        let mut sim = Simulation::seeded(cli.simulation_config(), 1);
        let report = write_json_report(&mut sim, steps, &mut stdout).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(value["steps_requested"], 5);
        assert_eq!(value["score"], report.score);
        assert!(String::from_utf8(stderr).unwrap().ends_with(STEPS_PROMPT));
    }
}
