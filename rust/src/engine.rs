//! Simulation entry point: validate, dispatch, schedule, measure.

use thiserror::Error;

use crate::config::SimulationConfig;
use crate::log_dispatch;
use crate::metrics::compute_metrics;
use crate::models::{Process, RunResult};
use crate::policy::Policy;
use crate::process_table::{ProcessTable, ValidationError};

/// Errors that can occur before a simulation starts.
///
/// Once all checks pass a run always completes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unsupported scheduling policy: {0}")]
    UnsupportedPolicy(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Run one simulation.
///
/// Checks the policy selector, then the Round Robin quantum, then the
/// process set. Identical inputs always give identical results.
pub fn simulate(
    processes: Vec<Process>,
    config: &SimulationConfig,
) -> Result<RunResult, EngineError> {
    let policy: Policy = config.policy.parse()?;
    let strategy = policy.strategy(config.time_quantum)?;
    let table = ProcessTable::new(processes, policy.requires_priority())?;
    let verbosity = config.verbosity;

    log_dispatch!(
        verbosity,
        "Simulating {} processes with {}, horizon {}",
        table.len(),
        policy.label(),
        table.horizon()
    );

    let schedule = strategy.schedule(&table, verbosity);
    let metrics = compute_metrics(&table, &schedule.completions);

    log_dispatch!(
        verbosity,
        "Done: {} intervals, avg WT {:.2}, avg TAT {:.2}",
        schedule.timeline.len(),
        metrics.average_waiting_time,
        metrics.average_turnaround_time
    );

    Ok(RunResult {
        policy: policy.tag().to_string(),
        timeline: schedule.timeline,
        average_waiting_time: metrics.average_waiting_time,
        average_turnaround_time: metrics.average_turnaround_time,
        process_metrics: metrics.per_process,
    })
}
