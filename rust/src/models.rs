//! Data types exchanged with callers of the engine.

use pyo3::prelude::*;

/// Simulation time unit.
pub type Time = i64;

/// A process descriptor supplied by the caller.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    #[pyo3(get, set)]
    pub pid: String,
    #[pyo3(get, set)]
    pub arrival: Time,
    #[pyo3(get, set)]
    pub burst: Time,
    /// Lower value = higher priority. Only the Priority policy reads it.
    #[pyo3(get, set)]
    pub priority: Option<i64>,
}

#[pymethods]
impl Process {
    #[new]
    #[pyo3(signature = (pid, arrival, burst, priority=None))]
    pub fn new(pid: String, arrival: Time, burst: Time, priority: Option<i64>) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Process(pid={:?}, arrival={}, burst={}, priority={:?})",
            self.pid, self.arrival, self.burst, self.priority
        )
    }
}

/// A span `[start, end)` during which one process holds the processor.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineInterval {
    #[pyo3(get)]
    pub pid: String,
    #[pyo3(get)]
    pub start: Time,
    #[pyo3(get)]
    pub end: Time,
}

#[pymethods]
impl TimelineInterval {
    #[new]
    pub fn new(pid: String, start: Time, end: Time) -> Self {
        Self { pid, start, end }
    }

    /// Length of the span in time units.
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    fn __repr__(&self) -> String {
        format!(
            "TimelineInterval(pid={:?}, start={}, end={})",
            self.pid, self.start, self.end
        )
    }
}

/// Derived timings for a single process.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessMetrics {
    #[pyo3(get)]
    pub pid: String,
    #[pyo3(get)]
    pub arrival: Time,
    #[pyo3(get)]
    pub burst: Time,
    #[pyo3(get)]
    pub completion: Time,
    #[pyo3(get)]
    pub turnaround: Time,
    #[pyo3(get)]
    pub waiting: Time,
}

#[pymethods]
impl ProcessMetrics {
    fn __repr__(&self) -> String {
        format!(
            "ProcessMetrics(pid={:?}, completion={}, turnaround={}, waiting={})",
            self.pid, self.completion, self.turnaround, self.waiting
        )
    }
}

/// Output of one simulation run.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Canonical tag of the policy that produced this result.
    #[pyo3(get)]
    pub policy: String,
    #[pyo3(get)]
    pub timeline: Vec<TimelineInterval>,
    #[pyo3(get)]
    pub average_waiting_time: f64,
    #[pyo3(get)]
    pub average_turnaround_time: f64,
    /// Per-process metrics in input order.
    #[pyo3(get)]
    pub process_metrics: Vec<ProcessMetrics>,
}

#[pymethods]
impl RunResult {
    /// End of the last interval (0 for an empty timeline).
    #[getter]
    pub fn makespan(&self) -> Time {
        self.timeline.last().map_or(0, |interval| interval.end)
    }

    /// Completion time keyed by pid.
    pub fn completion_times(&self) -> std::collections::HashMap<String, Time> {
        self.process_metrics
            .iter()
            .map(|m| (m.pid.clone(), m.completion))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "RunResult(policy={}, intervals={}, avg_wt={:.2}, avg_tat={:.2})",
            self.policy,
            self.timeline.len(),
            self.average_waiting_time,
            self.average_turnaround_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makespan_and_completion_times() {
        let result = RunResult {
            policy: "FCFS".to_string(),
            timeline: vec![
                TimelineInterval::new("A".to_string(), 0, 5),
                TimelineInterval::new("B".to_string(), 7, 10),
            ],
            average_waiting_time: 0.0,
            average_turnaround_time: 0.0,
            process_metrics: vec![ProcessMetrics {
                pid: "A".to_string(),
                arrival: 0,
                burst: 5,
                completion: 5,
                turnaround: 5,
                waiting: 0,
            }],
        };

        assert_eq!(result.makespan(), 10);
        assert_eq!(result.timeline[1].duration(), 3);
        assert_eq!(result.completion_times().get("A"), Some(&5));
    }
}
