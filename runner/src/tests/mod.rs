use processor::{format_reports, run_fcfs, run_preemptive_priority, run_round_robin, run_srtf};
use scheduler::{Process, ProcessSpec, Ticks};

use std::env;
use std::fs;

mod preemption;
mod ties;

fn write_reports(folder: &str, name: &str, reports: &str) {
    let quantum = quantum();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}___{quantum}.log"), reports).unwrap();
}

fn read_reports(folder: &str, name: &str) -> String {
    let quantum = quantum();
    fs::read_to_string(format!("../outputs/{folder}/{name}___{quantum}.log")).unwrap()
}

/// Runs every policy over `processes`, given as (arrival, burst, priority),
/// and compares the formatted reports with the stored ones.
fn run(folder: &str, name: &str, processes: &[(Ticks, Ticks, u32)]) {
    let processes = Process::table(
        processes
            .iter()
            .map(|&(arrival, burst, priority)| ProcessSpec::new(arrival, burst, priority)),
    );
    let reports = vec![
        run_fcfs(&processes).unwrap(),
        run_srtf(&processes).unwrap(),
        run_preemptive_priority(&processes).unwrap(),
        run_round_robin(&processes, quantum()).unwrap(),
    ];
    let output = format_reports(&reports);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_reports(folder, name, &output);
    } else {
        let reference = read_reports(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn quantum() -> usize {
    env::var("QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<usize>()
        .unwrap()
}
