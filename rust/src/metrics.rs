//! Waiting and turnaround metrics derived from completion times.

use crate::models::{ProcessMetrics, Time};
use crate::process_table::ProcessTable;
use crate::strategies::CompletionRecord;

/// Per-process metrics plus run-level averages.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub per_process: Vec<ProcessMetrics>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

/// Compute metrics for every process in `table`.
///
/// turnaround = completion - arrival, waiting = turnaround - burst. The
/// averages divide by the table size, which validation guarantees is
/// non-zero. Every strategy records a completion for every process.
pub fn compute_metrics(table: &ProcessTable, completions: &CompletionRecord) -> Metrics {
    debug_assert!(completions.is_complete());

    let per_process: Vec<ProcessMetrics> = completions
        .iter()
        .map(|(idx, completion)| {
            let process = table.get(idx);
            let turnaround = completion - process.arrival;
            ProcessMetrics {
                pid: process.pid.clone(),
                arrival: process.arrival,
                burst: process.burst,
                completion,
                turnaround,
                waiting: turnaround - process.burst,
            }
        })
        .collect();

    let count = table.len() as f64;
    let total_waiting: Time = per_process.iter().map(|m| m.waiting).sum();
    let total_turnaround: Time = per_process.iter().map(|m| m.turnaround).sum();

    Metrics {
        per_process,
        average_waiting_time: total_waiting as f64 / count,
        average_turnaround_time: total_turnaround as f64 / count,
    }
}
