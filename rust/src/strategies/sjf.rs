//! Shortest-Job-First (non-preemptive).

use crate::policy::Policy;
use crate::process_table::ProcessTable;

use super::non_preemptive::run_to_completion;
use super::{Schedule, Strategy};

/// Among arrived processes, run the one with the smallest burst to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl Strategy for ShortestJobFirst {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule {
        run_to_completion(table, verbosity, |process| process.burst)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_shortest_arrived_job_runs_next() {
        let table = table(vec![p("A", 0, 8), p("B", 1, 4), p("C", 2, 9), p("D", 3, 5)]);
        let schedule = ShortestJobFirst.schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 8), ("B", 8, 12), ("D", 12, 17), ("C", 17, 26)]
        );
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_running_job_is_not_preempted() {
        // B is shorter but arrives after A has started.
        let table = table(vec![p("A", 0, 10), p("B", 1, 1)]);
        let schedule = ShortestJobFirst.schedule(&table, 0);

        assert_eq!(spans(&schedule.timeline), vec![("A", 0, 10), ("B", 10, 11)]);
    }

    #[test]
    fn test_equal_bursts_keep_input_order_not_arrival_order() {
        // Both have arrived by the time A finishes; C was supplied before B.
        let table = table(vec![p("A", 0, 4), p("C", 2, 3), p("B", 1, 3)]);
        let schedule = ShortestJobFirst.schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 4), ("C", 4, 7), ("B", 7, 10)]
        );
    }
}
