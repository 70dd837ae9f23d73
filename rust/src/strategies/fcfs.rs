//! First-Come-First-Served.

use crate::models::Time;
use crate::policy::Policy;
use crate::process_table::ProcessTable;
use crate::{log_dispatch, log_trace};

use super::{CompletionRecord, Schedule, Strategy, TimelineBuilder};

/// Runs processes to completion in arrival order; equal arrivals keep input
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Strategy for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule {
        let mut timeline = TimelineBuilder::with_capacity(table.len());
        let mut completions = CompletionRecord::new(table.len());
        let mut clock: Time = 0;

        for idx in table.arrival_order() {
            let process = table.get(idx);
            let start = clock.max(process.arrival);
            if start > clock {
                log_trace!(verbosity, "  Idle from {} to {}", clock, start);
            }
            let end = start + process.burst;

            log_dispatch!(verbosity, "Time {}: run {} until {}", start, process.pid, end);
            timeline.push(idx, start, end);
            completions.record(idx, end);
            clock = end;
        }

        Schedule {
            timeline: timeline.into_intervals(table),
            completions,
        }
    }
}
