//! Priority scheduling (non-preemptive).

use crate::policy::Policy;
use crate::process_table::ProcessTable;

use super::non_preemptive::run_to_completion;
use super::{Schedule, Strategy};

/// Among arrived processes, run the one with the numerically smallest
/// priority to completion.
///
/// The process table is validated with priorities required, so the
/// `i64::MAX` fallback never takes effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl Strategy for PriorityScheduling {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn schedule(&self, table: &ProcessTable, verbosity: u8) -> Schedule {
        run_to_completion(table, verbosity, |process| {
            process.priority.unwrap_or(i64::MAX)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::Process;

    fn priority_table(processes: Vec<Process>) -> ProcessTable {
        ProcessTable::new(processes, true).unwrap()
    }

    #[test]
    fn test_lower_value_wins() {
        let table = priority_table(vec![
            pp("A", 0, 3, 2),
            pp("B", 1, 2, 3),
            pp("C", 1, 4, 1),
            pp("D", 2, 1, 2),
        ]);
        let schedule = PriorityScheduling.schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("A", 0, 3), ("C", 3, 7), ("D", 7, 8), ("B", 8, 10)]
        );
        assert_well_formed(&table, &schedule);
    }

    #[test]
    fn test_equal_arrival_and_priority_run_in_input_order() {
        let table = priority_table(vec![pp("Q", 0, 5, 1), pp("P", 0, 2, 1), pp("R", 0, 1, 4)]);
        let schedule = PriorityScheduling.schedule(&table, 0);

        assert_eq!(
            spans(&schedule.timeline),
            vec![("Q", 0, 5), ("P", 5, 7), ("R", 7, 8)]
        );
    }

    #[test]
    fn test_negative_priorities_are_allowed() {
        let table = priority_table(vec![pp("A", 0, 1, 0), pp("B", 0, 1, -5)]);
        let schedule = PriorityScheduling.schedule(&table, 0);

        assert_eq!(spans(&schedule.timeline), vec![("B", 0, 1), ("A", 1, 2)]);
    }
}
