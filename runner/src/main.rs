//! CPU scheduling simulator
//!
//! Reads a set of processes (interactively, from a JSON file, or
//! generated from a seed), runs them under FCFS, SRTF, preemptive
//! priority and Round Robin, and prints per-process waiting and
//! turnaround times, averages, CPU utilization and a Gantt chart.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use processor::{format_report, playback, Report};

mod input;
mod workload;

use input::Prompter;

/// Scheduling policy options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Policy {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Remaining-Time-First (preemptive SJF)
    Srtf,
    /// Preemptive priority, lower value first
    Priority,
    /// Round Robin with the given quantum
    Rr,
    /// Run all policies for comparison
    All,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Srtf => write!(f, "SRTF"),
            Policy::Priority => write!(f, "Priority"),
            Policy::Rr => write!(f, "Round Robin"),
            Policy::All => write!(f, "ALL"),
        }
    }
}

impl Policy {
    fn expand(self) -> Vec<Policy> {
        match self {
            Policy::All => vec![Policy::Fcfs, Policy::Srtf, Policy::Priority, Policy::Rr],
            policy => vec![policy],
        }
    }
}

/// Simulate classical CPU scheduling policies
#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(about = "Simulate FCFS, SRTF, priority and Round Robin scheduling", long_about = None)]
struct Args {
    /// Scheduling policy to simulate
    #[arg(short, long, value_enum, default_value_t = Policy::All)]
    policy: Policy,

    /// Round Robin time quantum (asked for when missing)
    #[arg(short, long, env = "SCHED_QUANTUM", value_parser = parse_quantum)]
    quantum: Option<usize>,

    /// JSON file with an array of {"arrival", "burst", "priority"} objects
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many synthetic processes instead of asking for them
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for the synthetic processes
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Replay every run, waiting this many milliseconds per time unit
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Print the reports as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_quantum(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(quantum) if quantum >= 1 => Ok(quantum),
        _ => Err(format!("invalid time quantum: {value}, must be a positive integer")),
    }
}

fn show(run: usize, report: &Report, delay: Duration) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if !delay.is_zero() {
        playback::play(report, delay, &mut stdout)?;
    }
    write!(stdout, "{}", format_report(run, report))?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let processes = match (&args.input, args.random) {
        (Some(path), _) => workload::load(path)?,
        (None, Some(count)) => workload::synthetic(count, args.seed),
        (None, None) => prompter.processes()?,
    };
    info!("simulating {} processes", processes.len());

    let delay = Duration::from_millis(args.delay_ms);
    let mut reports = Vec::new();
    for policy in args.policy.expand() {
        let result = match policy {
            Policy::Fcfs => processor::run_fcfs(&processes),
            Policy::Srtf => processor::run_srtf(&processes),
            Policy::Priority => processor::run_preemptive_priority(&processes),
            Policy::Rr => {
                // Asked for only once the other runs are printed.
                let quantum = match args.quantum {
                    Some(quantum) => quantum,
                    None => prompter.quantum()?,
                };
                processor::run_round_robin(&processes, quantum)
            }
            Policy::All => continue,
        };

        let report = result.with_context(|| format!("{policy} simulation failed"))?;
        if !args.json {
            show(reports.len() + 1, &report, delay)?;
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
