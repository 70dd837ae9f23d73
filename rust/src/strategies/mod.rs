//! Scheduling strategies.
//!
//! Every strategy consumes a validated [`ProcessTable`] and produces a
//! [`Schedule`]: the processor timeline plus the time each process finished.
//! Strategies never fail; anything they could choke on is rejected by table
//! validation or by the policy dispatcher.

mod fcfs;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTimeFirst;

use crate::interner::ProcessIdx;
use crate::models::{Time, TimelineInterval};
use crate::policy::Policy;
use crate::process_table::ProcessTable;

/// Common contract of the five scheduling policies.
pub trait Strategy {
    fn policy(&self) -> Policy;

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule;
}

/// Raw output of a strategy, before metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub timeline: Vec<TimelineInterval>,
    pub completions: CompletionRecord,
}

/// Completion time per process, indexed like the process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    times: Vec<Option<Time>>,
    completed: usize,
}

impl CompletionRecord {
    pub fn new(len: usize) -> Self {
        Self {
            times: vec![None; len],
            completed: 0,
        }
    }

    /// Record that `idx` finished at `time`. A process finishes once.
    pub fn record(&mut self, idx: ProcessIdx, time: Time) {
        debug_assert!(self.times[idx].is_none(), "process {idx} completed twice");
        if self.times[idx].replace(time).is_none() {
            self.completed += 1;
        }
    }

    #[inline]
    pub fn get(&self, idx: ProcessIdx) -> Option<Time> {
        self.times.get(idx).copied().flatten()
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.times.len()
    }

    /// Recorded `(index, completion)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessIdx, Time)> + '_ {
        self.times
            .iter()
            .enumerate()
            .filter_map(|(idx, time)| time.map(|t| (idx, t)))
    }
}

/// Accumulates `(process, start, end)` spans in start order.
#[derive(Debug, Default)]
struct TimelineBuilder {
    spans: Vec<(ProcessIdx, Time, Time)>,
}

impl TimelineBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            spans: Vec::with_capacity(capacity),
        }
    }

    /// Append a span as its own interval.
    fn push(&mut self, idx: ProcessIdx, start: Time, end: Time) {
        debug_assert!(start < end);
        debug_assert!(self.spans.last().map_or(true, |&(_, _, last_end)| last_end <= start));
        self.spans.push((idx, start, end));
    }

    /// Append a span, extending the last interval if it is the same process
    /// and the spans touch.
    fn extend_or_push(&mut self, idx: ProcessIdx, start: Time, end: Time) {
        if let Some((last_idx, _, last_end)) = self.spans.last_mut() {
            if *last_idx == idx && *last_end == start {
                *last_end = end;
                return;
            }
        }
        self.push(idx, start, end);
    }

    fn into_intervals(self, table: &ProcessTable) -> Vec<TimelineInterval> {
        self.spans
            .into_iter()
            .map(|(idx, start, end)| TimelineInterval::new(table.pid(idx).to_string(), start, end))
            .collect()
    }
}
