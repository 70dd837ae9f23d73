//! Shortest-Remaining-Time-First (preemptive).
//!
//! Semantically a tick simulation: every time unit, the arrived process with
//! the least remaining burst (ties by input order) runs for one unit, and
//! consecutive units of one process form a single interval.
//!
//! Between two events (an arrival, or the running process finishing) that
//! choice cannot change: the running process only gets shorter while every
//! other key stays fixed. So the clock jumps from event to event, with ready
//! processes in a min-heap keyed on `(remaining, index)`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::interner::ProcessIdx;
use crate::models::Time;
use crate::policy::Policy;
use crate::process_table::ProcessTable;
use crate::{log_dispatch, log_queue, log_trace};

use super::{CompletionRecord, Schedule, Strategy, TimelineBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTimeFirst;

impl Strategy for ShortestRemainingTimeFirst {
    fn policy(&self) -> Policy {
        Policy::Srtf
    }

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule {
        let mut remaining = table.remaining_bursts();
        let mut pending = table.arrival_order().into_iter().peekable();
        let mut ready: BinaryHeap<Reverse<(Time, ProcessIdx)>> =
            BinaryHeap::with_capacity(table.len());
        let mut timeline = TimelineBuilder::with_capacity(table.len());
        let mut completions = CompletionRecord::new(table.len());
        let mut clock: Time = 0;
        let mut last_run: Option<ProcessIdx> = None;

        loop {
            while let Some(idx) = pending.next_if(|&idx| table.get(idx).arrival <= clock) {
                log_trace!(verbosity, "  {} arrives at {}", table.pid(idx), clock);
                ready.push(Reverse((remaining[idx], idx)));
            }

            let Some(Reverse((_, idx))) = ready.pop() else {
                match pending.peek() {
                    Some(&next) => {
                        let arrival = table.get(next).arrival;
                        log_trace!(verbosity, "  Idle from {} to {}", clock, arrival);
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            log_queue!(
                verbosity,
                "  Time {}: selected {} (remaining={}), {} waiting",
                clock,
                table.pid(idx),
                remaining[idx],
                ready.len()
            );

            // Run until it finishes or the next arrival forces a re-check.
            let finish = clock + remaining[idx];
            let until = match pending.peek() {
                Some(&next) => finish.min(table.get(next).arrival),
                None => finish,
            };

            if last_run != Some(idx) {
                log_dispatch!(verbosity, "Time {}: switch to {}", clock, table.pid(idx));
            }
            timeline.extend_or_push(idx, clock, until);
            remaining[idx] -= until - clock;
            clock = until;
            last_run = Some(idx);

            if remaining[idx] == 0 {
                log_dispatch!(verbosity, "Time {}: {} completes", clock, table.pid(idx));
                completions.record(idx, clock);
            } else {
                ready.push(Reverse((remaining[idx], idx)));
            }
        }

        Schedule {
            timeline: timeline.into_intervals(table),
            completions,
        }
    }
}
