//! Shared driver for the non-preemptive selection policies (SJF, Priority).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::interner::ProcessIdx;
use crate::models::{Process, Time};
use crate::process_table::ProcessTable;
use crate::{log_dispatch, log_queue, log_trace};

use super::{CompletionRecord, Schedule, TimelineBuilder};

/// Repeatedly pick the arrived, unfinished process with the smallest
/// `key`, breaking ties by input order, and run it to completion.
///
/// Arrived processes sit in a min-heap on `(key, index)`. When nothing has
/// arrived the clock jumps to the next arrival.
pub(super) fn run_to_completion<K, F>(table: &ProcessTable, verbosity: u8, key: F) -> Schedule
where
    K: Ord + Copy + std::fmt::Debug,
    F: Fn(&Process) -> K,
{
    let mut pending = table.arrival_order().into_iter().peekable();
    let mut ready: BinaryHeap<Reverse<(K, ProcessIdx)>> = BinaryHeap::with_capacity(table.len());
    let mut timeline = TimelineBuilder::with_capacity(table.len());
    let mut completions = CompletionRecord::new(table.len());
    let mut clock: Time = 0;

    loop {
        while let Some(idx) = pending.next_if(|&idx| table.get(idx).arrival <= clock) {
            ready.push(Reverse((key(table.get(idx)), idx)));
        }

        log_queue!(
            verbosity,
            "  Ready at {}: {:?}",
            clock,
            ready
                .clone()
                .into_sorted_vec()
                .iter()
                .rev()
                .map(|Reverse((k, idx))| (table.pid(*idx), *k))
                .collect::<Vec<_>>()
        );

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

        let process = table.get(idx);
        let end = clock + process.burst;
        log_dispatch!(verbosity, "Time {}: run {} until {}", clock, process.pid, end);
        timeline.push(idx, clock, end);
        completions.record(idx, end);
        clock = end;
    }

    Schedule {
        timeline: timeline.into_intervals(table),
        completions,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_key_orders_arrived_processes_only() {
        // Largest burst first, to show the key is caller-defined.
        let table = table(vec![p("A", 0, 2), p("B", 1, 1), p("C", 1, 5)]);
        let schedule = run_to_completion(&table, 0, |p| Reverse(p.burst));

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 2), ("C", 2, 7), ("B", 7, 8)]
        );
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_equal_keys_use_input_order() {
        let table = table(vec![p("first", 0, 3), p("second", 0, 3), p("third", 0, 3)]);
        let schedule = run_to_completion(&table, 0, |p| p.burst);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("first", 0, 3), ("second", 3, 6), ("third", 6, 9)]
        );
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let table = table(vec![p("A", 5, 2), p("B", 9, 1)]);
        let schedule = run_to_completion(&table, 0, |p| p.burst);

        assert_eq!(spans(&schedule.timeline), vec![("A", 5, 7), ("B", 9, 10)]);
        assert_well_formed(&table, &schedule);
    }
}
