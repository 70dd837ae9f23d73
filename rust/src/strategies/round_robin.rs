//! Round Robin with a fixed time quantum.

use std::collections::VecDeque;

use crate::interner::ProcessIdx;
use crate::models::Time;
use crate::policy::Policy;
use crate::process_table::ProcessTable;
use crate::{log_dispatch, log_queue, log_trace};

use super::{CompletionRecord, Schedule, Strategy, TimelineBuilder};

/// FIFO ready queue; each turn runs `min(quantum, remaining)` units.
///
/// Arrivals are admitted at the start of each turn, after the previous
/// process has already been requeued, so a process that arrived during a
/// slice lines up behind the process that was just preempted. Every slice
/// is its own interval, even when one process runs twice in a row.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    time_quantum: Time,
}

impl RoundRobin {
    /// `time_quantum` must be positive; the policy dispatcher checks it.
    pub fn new(time_quantum: Time) -> Self {
        debug_assert!(time_quantum > 0);
        Self { time_quantum }
    }

    pub fn time_quantum(&self) -> Time {
        self.time_quantum
    }
}

impl Strategy for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule {
        let mut remaining = table.remaining_bursts();
        let mut not_arrived: VecDeque<ProcessIdx> = table.arrival_order().into();
        let mut ready: VecDeque<ProcessIdx> = VecDeque::with_capacity(table.len());
        let mut timeline = TimelineBuilder::with_capacity(table.len());
        let mut completions = CompletionRecord::new(table.len());
        let mut clock: Time = 0;

        loop {
            while let Some(&idx) = not_arrived.front() {
                if table.get(idx).arrival > clock {
                    break;
                }
                not_arrived.pop_front();
                ready.push_back(idx);
            }

            log_queue!(
                verbosity,
                "  Ready at {}: {:?}",
                clock,
                ready.iter().map(|&idx| table.pid(idx)).collect::<Vec<_>>()
            );

            let Some(idx) = ready.pop_front() else {
                match not_arrived.front() {
                    Some(&next) => {
                        let arrival = table.get(next).arrival;
                        log_trace!(verbosity, "  Idle from {} to {}", clock, arrival);
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = self.time_quantum.min(remaining[idx]);
            let end = clock + slice;
            log_dispatch!(verbosity, "Time {}: run {} until {}", clock, table.pid(idx), end);
            timeline.push(idx, clock, end);
            clock = end;
            remaining[idx] -= slice;

            if remaining[idx] > 0 {
                ready.push_back(idx);
            } else {
                log_dispatch!(verbosity, "Time {}: {} completes", clock, table.pid(idx));
                completions.record(idx, clock);
            }
        }

        Schedule {
            timeline: timeline.into_intervals(table),
            completions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_preempted_process_queues_ahead_of_mid_slice_arrivals() {
        let table = table(vec![p("A", 0, 5), p("B", 1, 3), p("C", 2, 1), p("D", 3, 2)]);
        let schedule = RoundRobin::new(4).schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![
                ("A", 0, 4),
                ("A", 4, 5),
                ("B", 5, 8),
                ("C", 8, 9),
                ("D", 9, 11)
            ]
        );
        assert_eq!(schedule.completions.get(0), Some(5));
        assert_eq!(schedule.completions.get(3), Some(11));
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_small_quantum_rotates() {
        let table = table(vec![p("A", 0, 3), p("B", 0, 2)]);
        let schedule = RoundRobin::new(1).schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 1), ("B", 1, 2), ("A", 2, 3), ("B", 3, 4), ("A", 4, 5)]
        );
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_arrival_exactly_at_slice_end_goes_behind() {
        // B arrives at t=2, the instant A's first slice ends.
        let table = table(vec![p("A", 0, 4), p("B", 2, 2)]);
        let schedule = RoundRobin::new(2).schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 2), ("A", 2, 4), ("B", 4, 6)]
        );
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let table = table(vec![p("A", 2, 1), p("B", 6, 3)]);
        let schedule = RoundRobin::new(2).schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 2, 3), ("B", 6, 8), ("B", 8, 9)]
        );
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let table = table(vec![p("A", 0, 5), p("B", 2, 3)]);
        let schedule = RoundRobin::new(100).schedule(&table, 0);

        assert_eq!(spans(&schedule.timeline), vec![("A", 0, 5), ("B", 5, 8)]);
        assert_eq!(RoundRobin::new(100).time_quantum(), 100);
    }
}
