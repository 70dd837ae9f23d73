//! Validated process set for one simulation run.

use thiserror::Error;

use crate::interner::{PidInterner, ProcessIdx};
use crate::models::{Process, Time};

/// Reasons a process set is rejected before simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one process is required")]
    Empty,
    #[error("Duplicate process id: {0}")]
    DuplicatePid(String),
    #[error("Process {pid} has negative arrival time {arrival}")]
    NegativeArrival { pid: String, arrival: Time },
    #[error("Process {pid} has non-positive burst time {burst}")]
    NonPositiveBurst { pid: String, burst: Time },
    #[error("Process {0} has no priority, but the selected policy requires one")]
    MissingPriority(String),
    #[error("Process times too large: latest arrival plus total burst, times {count} processes, overflows the time range")]
    TimeOverflow { count: usize },
}

/// Processes of one run, in input order, with unique pids.
///
/// Input order is significant: every strategy breaks ties by it, and the
/// index of a process in this table is its interned id.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    processes: Vec<Process>,
    pids: PidInterner,
}

impl ProcessTable {
    /// Validate `processes` and build the table.
    ///
    /// `require_priority` is set by policies that order on `priority`.
    pub fn new(processes: Vec<Process>, require_priority: bool) -> Result<Self, ValidationError> {
        if processes.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut pids = PidInterner::with_capacity(processes.len());
        for process in &processes {
            if pids.insert(&process.pid).is_none() {
                return Err(ValidationError::DuplicatePid(process.pid.clone()));
            }
            if process.arrival < 0 {
                return Err(ValidationError::NegativeArrival {
                    pid: process.pid.clone(),
                    arrival: process.arrival,
                });
            }
            if process.burst <= 0 {
                return Err(ValidationError::NonPositiveBurst {
                    pid: process.pid.clone(),
                    burst: process.burst,
                });
            }
            if require_priority && process.priority.is_none() {
                return Err(ValidationError::MissingPriority(process.pid.clone()));
            }
        }

        // Every clock value and completion is at most the horizon, and each
        // metric sum is at most horizon * count.
        let count = processes.len();
        let horizon = processes
            .iter()
            .try_fold(0, |total: Time, p| total.checked_add(p.burst))
            .and_then(|total| {
                let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
                total.checked_add(latest_arrival)
            })
            .filter(|horizon| horizon.checked_mul(count as Time).is_some());
        if horizon.is_none() {
            return Err(ValidationError::TimeOverflow { count });
        }

        Ok(Self { processes, pids })
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    #[inline]
    pub fn get(&self, idx: ProcessIdx) -> &Process {
        &self.processes[idx]
    }

    #[inline]
    pub fn pid(&self, idx: ProcessIdx) -> &str {
        &self.processes[idx].pid
    }

    pub fn index_of(&self, pid: &str) -> Option<ProcessIdx> {
        self.pids.get(pid)
    }

    /// Indices ordered by arrival, ties kept in input order.
    pub fn arrival_order(&self) -> Vec<ProcessIdx> {
        let mut order: Vec<ProcessIdx> = (0..self.processes.len()).collect();
        order.sort_by_key(|&idx| self.processes[idx].arrival);
        order
    }

    /// Fresh remaining-burst counters for preemptive strategies.
    pub fn remaining_bursts(&self) -> Vec<Time> {
        self.processes.iter().map(|p| p.burst).collect()
    }

    pub fn total_burst(&self) -> Time {
        self.processes.iter().map(|p| p.burst).sum()
    }

    /// Latest arrival plus total burst: no run can finish later than this.
    pub fn horizon(&self) -> Time {
        let latest_arrival = self.processes.iter().map(|p| p.arrival).max().unwrap_or(0);
        latest_arrival + self.total_burst()
    }
}
