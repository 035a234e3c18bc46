use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::prelude::*;

use scheduler::{Process, ProcessSpec, Ticks};

const MAX_ARRIVAL_GAP: Ticks = 3;
const MAX_BURST: Ticks = 10;
const MAX_PRIORITY: u32 = 4;

/// Reads a JSON array of `{ "arrival", "burst", "priority" }` objects.
pub fn load(path: &Path) -> Result<Vec<Process>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<Process>> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(text)?;
    Ok(Process::table(specs))
}

/// A reproducible synthetic workload of `count` processes.
///
/// Arrivals are non-decreasing, bursts are in `1..=MAX_BURST`.
pub fn synthetic(count: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrival = 0;

    Process::table((0..count).map(|_| {
        arrival += rng.random_range(0..=MAX_ARRIVAL_GAP);
        ProcessSpec::new(
            arrival,
            rng.random_range(1..=MAX_BURST),
            rng.random_range(0..=MAX_PRIORITY),
        )
    }))
}
