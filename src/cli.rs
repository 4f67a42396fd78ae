//! Command-line and environment configuration for the driver binary.
//!
//! Precedence: command-line flag, then `TETRIS_STACK_*` environment variable,
//! then the defaults in `tetris_stack_types`. The step count is the one value
//! that is asked for interactively when neither source provides it. The prompt
//! goes to stderr so stdout carries only frames or the JSON report.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::engine::SimulationConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_DELAY_MS, DEFAULT_STEPS, MAX_BOARD_DIM};

pub const BANNER: &str = "Tetris Stack - stacking simulation";

pub const STEPS_PROMPT: &str = "How many steps/pieces to simulate? (e.g. 30) ";

/// How steps are shown while the simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print every frame below the previous one.
    Plain,
    /// Redraw a single frame in place.
    Live,
}

/// Output format of the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Frames plus a closing score line.
    Text,
    /// No frames; one JSON report on stdout.
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tetris-stack",
    version,
    about = "Drop random pieces onto a board, clear full rows, keep score"
)]
pub struct Cli {
    /// Pieces to simulate; prompts when omitted.
    #[arg(long, env = "TETRIS_STACK_STEPS")]
    pub steps: Option<u32>,

    /// Pause between rendered steps, in milliseconds.
    #[arg(long, env = "TETRIS_STACK_DELAY_MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Seed for a reproducible run; random when omitted.
    #[arg(long, env = "TETRIS_STACK_SEED")]
    pub seed: Option<u64>,

    #[arg(
        long,
        default_value_t = BOARD_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_DIM as i64)
    )]
    pub width: u16,

    #[arg(
        long,
        default_value_t = BOARD_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_DIM as i64)
    )]
    pub height: u16,

    #[arg(long, value_enum, default_value_t = Mode::Plain)]
    pub mode: Mode,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    /// Configured step count, or the answer to the prompt written to `prompt_out`.
    pub fn resolve_steps<R: BufRead, W: Write>(
        &self,
        input: R,
        mut prompt_out: W,
    ) -> Result<u32> {
        if let Some(steps) = self.steps {
            return Ok(steps);
        }
        writeln!(prompt_out, "{}", BANNER)?;
        prompt_steps(input, prompt_out)
    }

    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width,
            height: self.height,
            ..SimulationConfig::default()
        }
    }
}

/// Interpret an answer to the step prompt.
///
/// Blank or unparsable answers fall back to [`DEFAULT_STEPS`].
pub fn parse_steps_answer(answer: &str) -> u32 {
    let answer = answer.trim();
    if answer.is_empty() {
        return DEFAULT_STEPS;
    }
    answer.parse().unwrap_or(DEFAULT_STEPS)
}

/// Ask for the step count on `output` and read one line from `input`.
pub fn prompt_steps<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<u32> {
    write!(output, "{}", STEPS_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_steps_answer(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_garbage_answer_uses_default() {
        assert_eq!(parse_steps_answer(""), DEFAULT_STEPS);
        assert_eq!(parse_steps_answer("  \n"), DEFAULT_STEPS);
        assert_eq!(parse_steps_answer("lots"), DEFAULT_STEPS);
        assert_eq!(parse_steps_answer("-3"), DEFAULT_STEPS);
    }

    #[test]
    fn numeric_answer_is_used() {
        assert_eq!(parse_steps_answer("12\n"), 12);
        assert_eq!(parse_steps_answer(" 0 "), 0);
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut out = Vec::new();
        let steps = prompt_steps(&b"7\nignored\n"[..], &mut out).unwrap();
        assert_eq!(steps, 7);
        assert_eq!(String::from_utf8(out).unwrap(), STEPS_PROMPT);
    }

    #[test]
    fn prompt_on_closed_input_uses_default() {
        let steps = prompt_steps(&b""[..], Vec::new()).unwrap();
        assert_eq!(steps, DEFAULT_STEPS);
    }

    #[test]
    fn configured_steps_skip_the_prompt() {
        let cli = Cli::try_parse_from(["tetris-stack", "--steps", "12"]).unwrap();
        let mut out = Vec::new();
        assert_eq!(cli.resolve_steps(&b"99\n"[..], &mut out).unwrap(), 12);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_steps_prints_banner_then_prompt() {
        let cli = Cli::try_parse_from(["tetris-stack"]).unwrap();
        let mut out = Vec::new();
        assert_eq!(cli.resolve_steps(&b"4\n"[..], &mut out).unwrap(), 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n{}", BANNER, STEPS_PROMPT)
        );
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["tetris-stack", "--seed", "5"]).unwrap();
        assert_eq!(cli.seed, Some(5));
        assert_eq!(cli.mode, Mode::Plain);
        assert_eq!(cli.format, ReportFormat::Text);
        assert_eq!(cli.simulation_config(), SimulationConfig::default());
    }

    #[test]
    fn cli_rejects_out_of_range_board() {
        assert!(Cli::try_parse_from(["tetris-stack", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["tetris-stack", "--height", "65"]).is_err());
    }

    #[test]
    fn cli_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
